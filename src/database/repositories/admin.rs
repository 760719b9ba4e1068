//! Admin repository implementation

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{normalize_email, Admin};
use crate::utils::errors::ApiError;

/// Fields required to insert an admin row
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new admin
    pub async fn create(&self, new_admin: NewAdmin) -> Result<Admin, ApiError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_admin.name)
        .bind(normalize_email(&new_admin.email))
        .bind(new_admin.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(admin)
    }

    /// Find admin by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, ApiError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, name, email, password_hash, created_at FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    /// Find admin by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, ApiError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, name, email, password_hash, created_at FROM admins WHERE email = $1",
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }
}

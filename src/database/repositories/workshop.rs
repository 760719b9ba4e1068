//! Workshop registration repository implementation

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{normalize_email, WorkshopForm, WorkshopRegistration};
use crate::utils::errors::ApiError;

#[derive(Debug, Clone)]
pub struct WorkshopRepository {
    pool: PgPool,
}

impl WorkshopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a registration. Unique indexes on user_id and email enforce
    /// one seat per user and per email under concurrency.
    pub async fn create(
        &self,
        user_id: Uuid,
        form: &WorkshopForm,
    ) -> Result<WorkshopRegistration, ApiError> {
        let registration = sqlx::query_as::<_, WorkshopRegistration>(
            r#"
            INSERT INTO workshop_registrations (id, user_id, name, email, phone, college, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, name, email, phone, college, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&form.name)
        .bind(normalize_email(&form.email))
        .bind(&form.phone)
        .bind(&form.college)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Find the registration made by a user
    pub async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<WorkshopRegistration>, ApiError> {
        let registration = sqlx::query_as::<_, WorkshopRegistration>(
            "SELECT id, user_id, name, email, phone, college, created_at FROM workshop_registrations WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Find a registration by attendee email (case-insensitive)
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<WorkshopRegistration>, ApiError> {
        let registration = sqlx::query_as::<_, WorkshopRegistration>(
            "SELECT id, user_id, name, email, phone, college, created_at FROM workshop_registrations WHERE email = $1",
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// All registrations, newest first
    pub async fn list(&self) -> Result<Vec<WorkshopRegistration>, ApiError> {
        let registrations = sqlx::query_as::<_, WorkshopRegistration>(
            "SELECT id, user_id, name, email, phone, college, created_at FROM workshop_registrations ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    /// Delete a registration
    pub async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM workshop_registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count registered participants
    pub async fn count(&self) -> Result<i64, ApiError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM workshop_registrations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

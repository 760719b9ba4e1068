//! Password reset repository implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{normalize_email, PasswordReset};
use crate::utils::errors::ApiError;

#[derive(Debug, Clone)]
pub struct PasswordResetRepository {
    pool: PgPool,
}

impl PasswordResetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a reset token for an email
    pub async fn create(
        &self,
        email: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<PasswordReset, ApiError> {
        let reset = sqlx::query_as::<_, PasswordReset>(
            r#"
            INSERT INTO password_resets (id, email, token, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, token, expires_at, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(normalize_email(email))
        .bind(token)
        .bind(expires_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(reset)
    }

    /// Look up a reset by its token
    pub async fn find_by_token(&self, token: &str) -> Result<Option<PasswordReset>, ApiError> {
        let reset = sqlx::query_as::<_, PasswordReset>(
            "SELECT id, email, token, expires_at, created_at FROM password_resets WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reset)
    }

    /// Delete a reset record once consumed
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM password_resets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

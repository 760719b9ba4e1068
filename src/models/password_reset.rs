//! Password reset model and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require_email, require_min_len};
use crate::utils::errors::{ApiError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub id: Uuid,
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PasswordReset {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

impl ForgotPasswordRequest {
    pub fn validate(&self) -> Result<()> {
        require_email(&self.email, "Invalid email address")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordRequest {
    pub fn validate(&self) -> Result<()> {
        require_min_len(&self.token, 1, "Reset token is required")?;
        require_min_len(&self.password, 6, "Password must be at least 6 characters")?;
        if self.password != self.confirm_password {
            return Err(ApiError::InvalidInput("Passwords don't match".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry() {
        let now = Utc::now();
        let reset = PasswordReset {
            id: Uuid::new_v4(),
            email: "asha@college.edu".to_string(),
            token: "abc".to_string(),
            expires_at: now + Duration::hours(1),
            created_at: now,
        };
        assert!(!reset.is_expired(now));
        assert!(reset.is_expired(now + Duration::hours(2)));
    }
}

//! User model and auth/profile request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require_email, require_min_len};
use crate::utils::errors::Result;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Never serialized into API responses.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub college: Option<String>,
    pub year: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<()> {
        require_min_len(&self.name, 2, "Name must be at least 2 characters")?;
        require_email(&self.email, "Invalid email address")?;
        require_min_len(&self.password, 6, "Password must be at least 6 characters")?;
        if self.password != self.confirm_password {
            return Err(crate::utils::errors::ApiError::InvalidInput(
                "Passwords don't match".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<()> {
        require_email(&self.email, "Invalid email address")?;
        require_min_len(&self.password, 6, "Password must be at least 6 characters")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub phone: Option<String>,
    pub college: Option<String>,
    pub year: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<()> {
        require_min_len(&self.name, 2, "Name is required")
    }
}

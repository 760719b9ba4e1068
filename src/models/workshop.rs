//! Workshop registration model and form payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require_email, require_min_len};
use crate::utils::errors::Result;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopRegistration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
}

impl WorkshopForm {
    pub fn validate(&self) -> Result<()> {
        require_min_len(&self.name, 2, "Name is required")?;
        require_email(&self.email, "Invalid email")?;
        require_min_len(&self.phone, 10, "Valid phone required")?;
        require_min_len(&self.college, 2, "College is required")?;
        Ok(())
    }
}

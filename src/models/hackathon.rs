//! Hackathon registration models and form payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require_email, require_min_len};
use crate::utils::errors::{ApiError, Result};

/// Maximum team members in addition to the leader
pub const MAX_TEAM_MEMBERS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HackathonRegistration {
    pub id: Uuid,
    pub team_name: String,
    pub leader_id: Uuid,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_phone: String,
    pub leader_college: String,
    pub leader_year: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HackathonMember {
    pub id: Uuid,
    pub registration_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A registration with its member rows attached, as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HackathonRegistrationWithMembers {
    #[serde(flatten)]
    pub registration: HackathonRegistration,
    pub members: Vec<HackathonMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl TeamMemberForm {
    pub fn validate(&self) -> Result<()> {
        require_min_len(&self.name, 2, "Name is required")?;
        require_email(&self.email, "Invalid email")?;
        require_min_len(&self.phone, 10, "Valid phone required")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonForm {
    pub team_name: String,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_phone: String,
    pub leader_college: String,
    pub leader_year: String,
    #[serde(default)]
    pub members: Vec<TeamMemberForm>,
}

impl HackathonForm {
    pub fn validate(&self) -> Result<()> {
        require_min_len(&self.team_name, 2, "Team name is required")?;
        require_min_len(&self.leader_name, 2, "Name is required")?;
        require_email(&self.leader_email, "Invalid email")?;
        require_min_len(&self.leader_phone, 10, "Valid phone required")?;
        require_min_len(&self.leader_college, 2, "College is required")?;
        require_min_len(&self.leader_year, 1, "Year is required")?;

        if self.members.len() > MAX_TEAM_MEMBERS {
            return Err(ApiError::InvalidInput(format!(
                "A team can have at most {MAX_TEAM_MEMBERS} members besides the leader"
            )));
        }

        for member in &self.members {
            member.validate()?;
        }

        Ok(())
    }
}

//! Data models module

pub mod admin;
pub mod hackathon;
pub mod password_reset;
pub mod user;
pub mod workshop;

pub use admin::Admin;
pub use hackathon::{
    HackathonForm, HackathonMember, HackathonRegistration, HackathonRegistrationWithMembers,
    TeamMemberForm,
};
pub use password_reset::{ForgotPasswordRequest, PasswordReset, ResetPasswordRequest};
pub use user::{LoginRequest, SignupRequest, UpdateProfileRequest, User};
pub use workshop::{WorkshopForm, WorkshopRegistration};

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::errors::{ApiError, Result};

/// Admin dashboard counters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_hackathon_teams: i64,
    pub total_workshop_participants: i64,
}

/// A user's registrations across both events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistrations {
    pub hackathon: Option<HackathonRegistrationWithMembers>,
    pub workshop: Option<WorkshopRegistration>,
}

static EMAIL_RE: OnceLock<regex::Regex> = OnceLock::new();

/// Check that a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    let re = EMAIL_RE
        .get_or_init(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
    re.is_match(email)
}

/// Validate an email field, returning the form's error message on failure
pub(crate) fn require_email(email: &str, message: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ApiError::InvalidInput(message.to_string()))
    }
}

/// Validate a minimum-length field
pub(crate) fn require_min_len(value: &str, min: usize, message: &str) -> Result<()> {
    if value.trim().len() >= min {
        Ok(())
    } else {
        Err(ApiError::InvalidInput(message.to_string()))
    }
}

/// Normalize an email for storage and comparison
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

//! Registration-integrity workflow
//!
//! The structurally interesting part of the system: register-once guarantees
//! for both events, case-insensitive email uniqueness inside a hackathon
//! team, and the admin listing/deletion/export operations over registration
//! data.
//!
//! Every register-once check here is advisory; the database unique indexes
//! are the authority, and a unique violation is translated back into the same
//! user-facing message the pre-check would have produced.

use std::collections::HashSet;

use tracing::warn;
use uuid::Uuid;

use crate::database::DatabaseService;
use crate::models::{
    normalize_email, DashboardStats, HackathonForm, HackathonRegistrationWithMembers,
    UserRegistrations, WorkshopForm, WorkshopRegistration,
};
use crate::services::email::{self, EmailService};
use crate::utils::csv;
use crate::utils::errors::{ApiError, Result};
use crate::utils::logging::log_admin_action;

/// Find a duplicated email across the leader and all members, if any.
///
/// Comparison is case-insensitive; the returned value is normalized.
pub fn find_duplicate_email(form: &HackathonForm) -> Option<String> {
    let mut seen = HashSet::new();
    let mut emails = vec![normalize_email(&form.leader_email)];
    emails.extend(form.members.iter().map(|m| normalize_email(&m.email)));

    emails.into_iter().find(|email| !seen.insert(email.clone()))
}

#[derive(Clone)]
pub struct RegistrationService {
    db: DatabaseService,
    email: EmailService,
}

impl RegistrationService {
    pub fn new(db: DatabaseService, email: EmailService) -> Self {
        Self { db, email }
    }

    /// Register a hackathon team for the authenticated leader
    pub async fn register_hackathon(
        &self,
        leader_id: Uuid,
        form: HackathonForm,
    ) -> Result<HackathonRegistrationWithMembers> {
        form.validate()?;

        if self
            .db
            .hackathon
            .find_by_leader_id(leader_id)
            .await?
            .is_some()
        {
            return Err(ApiError::AlreadyRegistered(
                "You have already registered a team".to_string(),
            ));
        }

        if find_duplicate_email(&form).is_some() {
            return Err(ApiError::InvalidInput(
                "Duplicate email addresses found".to_string(),
            ));
        }

        let registration = self
            .db
            .hackathon
            .create_with_members(leader_id, &form)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    ApiError::AlreadyRegistered("You have already registered a team".to_string())
                } else {
                    e
                }
            })?;

        let (subject, html) = email::hackathon_confirmation(&form);
        if let Err(e) = self.email.send(&form.leader_email, &subject, &html).await {
            warn!(email = %form.leader_email, error = %e, "Failed to send hackathon confirmation");
        }

        Ok(registration)
    }

    /// Register the authenticated user for the workshop
    pub async fn register_workshop(
        &self,
        user_id: Uuid,
        form: WorkshopForm,
    ) -> Result<WorkshopRegistration> {
        form.validate()?;

        if self.db.workshop.find_by_user_id(user_id).await?.is_some() {
            return Err(ApiError::AlreadyRegistered(
                "You have already registered for the workshop".to_string(),
            ));
        }

        if self.db.workshop.find_by_email(&form.email).await?.is_some() {
            return Err(ApiError::AlreadyRegistered(
                "This email is already registered".to_string(),
            ));
        }

        let registration = self
            .db
            .workshop
            .create(user_id, &form)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    ApiError::AlreadyRegistered(
                        "You have already registered for the workshop".to_string(),
                    )
                } else {
                    e
                }
            })?;

        let (subject, html) = email::workshop_confirmation(&form);
        if let Err(e) = self.email.send(&form.email, &subject, &html).await {
            warn!(email = %form.email, error = %e, "Failed to send workshop confirmation");
        }

        Ok(registration)
    }

    /// Both registrations (if any) of a user, for the account dashboard
    pub async fn user_registrations(&self, user_id: Uuid) -> Result<UserRegistrations> {
        let hackathon = match self.db.hackathon.find_by_leader_id(user_id).await? {
            Some(registration) => {
                let members = self.db.hackathon.members_of(registration.id).await?;
                Some(HackathonRegistrationWithMembers {
                    registration,
                    members,
                })
            }
            None => None,
        };

        let workshop = self.db.workshop.find_by_user_id(user_id).await?;

        Ok(UserRegistrations {
            hackathon,
            workshop,
        })
    }

    /// Dashboard counters
    pub async fn stats(&self) -> Result<DashboardStats> {
        self.db.get_stats().await
    }

    /// All hackathon registrations with members (admin)
    pub async fn list_hackathon(&self) -> Result<Vec<HackathonRegistrationWithMembers>> {
        self.db.hackathon.list_with_members().await
    }

    /// All workshop registrations (admin)
    pub async fn list_workshop(&self) -> Result<Vec<WorkshopRegistration>> {
        self.db.workshop.list().await
    }

    /// Delete a hackathon registration and its members (admin)
    pub async fn delete_hackathon(&self, admin_id: Uuid, id: Uuid) -> Result<()> {
        if !self.db.hackathon.delete(id).await? {
            return Err(ApiError::NotFound("Registration not found".to_string()));
        }

        log_admin_action(
            &admin_id.to_string(),
            "delete_hackathon_registration",
            Some(&id.to_string()),
        );
        Ok(())
    }

    /// Delete a workshop registration (admin)
    pub async fn delete_workshop(&self, admin_id: Uuid, id: Uuid) -> Result<()> {
        if !self.db.workshop.delete(id).await? {
            return Err(ApiError::NotFound("Registration not found".to_string()));
        }

        log_admin_action(
            &admin_id.to_string(),
            "delete_workshop_registration",
            Some(&id.to_string()),
        );
        Ok(())
    }

    /// CSV export of all hackathon registrations (admin)
    pub async fn export_hackathon_csv(&self) -> Result<String> {
        let registrations = self.db.hackathon.list_with_members().await?;
        Ok(csv::hackathon_csv(&registrations))
    }

    /// CSV export of all workshop registrations (admin)
    pub async fn export_workshop_csv(&self) -> Result<String> {
        let registrations = self.db.workshop.list().await?;
        Ok(csv::workshop_csv(&registrations))
    }

    /// CSV export of all user accounts (admin)
    pub async fn export_users_csv(&self) -> Result<String> {
        let users = self.db.users.list().await?;
        Ok(csv::users_csv(&users))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamMemberForm;

    fn member(email: &str) -> TeamMemberForm {
        TeamMemberForm {
            name: "Member".to_string(),
            email: email.to_string(),
            phone: "9876543210".to_string(),
        }
    }

    fn form(leader_email: &str, member_emails: &[&str]) -> HackathonForm {
        HackathonForm {
            team_name: "Null Pointers".to_string(),
            leader_name: "Asha Verma".to_string(),
            leader_email: leader_email.to_string(),
            leader_phone: "9876543210".to_string(),
            leader_college: "IIT".to_string(),
            leader_year: "3".to_string(),
            members: member_emails.iter().map(|e| member(e)).collect(),
        }
    }

    #[test]
    fn test_distinct_emails_pass() {
        let f = form("lead@college.edu", &["a@college.edu", "b@college.edu"]);
        assert_eq!(find_duplicate_email(&f), None);
    }

    #[test]
    fn test_duplicate_between_members_detected() {
        let f = form("lead@college.edu", &["a@college.edu", "a@college.edu"]);
        assert_eq!(find_duplicate_email(&f), Some("a@college.edu".to_string()));
    }

    #[test]
    fn test_duplicate_with_leader_detected() {
        let f = form("lead@college.edu", &["LEAD@College.EDU"]);
        assert_eq!(
            find_duplicate_email(&f),
            Some("lead@college.edu".to_string())
        );
    }

    #[test]
    fn test_case_insensitive_comparison() {
        let f = form("lead@college.edu", &["A@college.edu", "a@COLLEGE.edu"]);
        assert!(find_duplicate_email(&f).is_some());
    }

    #[test]
    fn test_no_members_no_duplicates() {
        let f = form("lead@college.edu", &[]);
        assert_eq!(find_duplicate_email(&f), None);
    }
}

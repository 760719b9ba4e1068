//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{
    AdminRepository, DatabasePool, HackathonRepository, PasswordResetRepository, UserRepository,
    WorkshopRepository,
};
use crate::database::repositories::admin::NewAdmin;
use crate::models::DashboardStats;
use crate::utils::errors::ApiError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub users: UserRepository,
    pub admins: AdminRepository,
    pub hackathon: HackathonRepository,
    pub workshop: WorkshopRepository,
    pub password_resets: PasswordResetRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            admins: AdminRepository::new(pool.clone()),
            hackathon: HackathonRepository::new(pool.clone()),
            workshop: WorkshopRepository::new(pool.clone()),
            password_resets: PasswordResetRepository::new(pool.clone()),
            pool,
        }
    }

    /// Check database connectivity
    pub async fn health_check(&self) -> Result<(), ApiError> {
        crate::database::connection::health_check(&self.pool).await
    }

    /// Create the default admin account if it does not exist yet.
    ///
    /// `password_hash` is already bcrypt-hashed by the caller.
    pub async fn seed_default_admin(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, ApiError> {
        if self.admins.find_by_email(email).await?.is_some() {
            tracing::debug!(email = email, "Default admin already exists");
            return Ok(false);
        }

        self.admins
            .create(NewAdmin {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
            })
            .await?;

        tracing::info!(email = email, "Default admin created");
        Ok(true)
    }

    /// Dashboard counters for the admin stats endpoint
    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        let (total_users, total_hackathon_teams, total_workshop_participants) = tokio::try_join!(
            self.users.count(),
            self.hackathon.count(),
            self.workshop.count(),
        )?;

        Ok(DashboardStats {
            total_users,
            total_hackathon_teams,
            total_workshop_participants,
        })
    }
}

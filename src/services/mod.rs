//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod email;
pub mod registration;
pub mod user;

// Re-export commonly used services
pub use auth::{AuthService, Claims, TokenType};
pub use email::EmailService;
pub use registration::RegistrationService;
pub use user::UserService;

use crate::config::Settings;
use crate::database::DatabaseService;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub email_service: EmailService,
    pub user_service: UserService,
    pub registration_service: RegistrationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, db: DatabaseService) -> Result<Self> {
        let auth_service = AuthService::new(settings.auth.clone());
        let email_service = EmailService::new(settings.email.clone())?;
        let user_service =
            UserService::new(db.clone(), auth_service.clone(), email_service.clone());
        let registration_service = RegistrationService::new(db, email_service.clone());

        Ok(Self {
            auth_service,
            email_service,
            user_service,
            registration_service,
        })
    }
}

//! User account service implementation
//!
//! Signup, login (user and admin), the password reset flow, and profile
//! updates. Repositories do the persistence; this layer owns the checks and
//! the auth handshakes around them.

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::database::repositories::user::NewUser;
use crate::database::DatabaseService;
use crate::models::{
    Admin, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
    UpdateProfileRequest, User,
};
use crate::services::auth::{AuthService, TokenType};
use crate::services::email::{self, EmailService};
use crate::utils::errors::{ApiError, Result};
use crate::utils::logging::log_auth_event;

/// Reset links expire after one hour
const RESET_TOKEN_TTL_HOURS: i64 = 1;

#[derive(Clone)]
pub struct UserService {
    db: DatabaseService,
    auth: AuthService,
    email: EmailService,
}

impl UserService {
    pub fn new(db: DatabaseService, auth: AuthService, email: EmailService) -> Self {
        Self { db, auth, email }
    }

    /// Create an account and issue a user token
    pub async fn signup(&self, request: SignupRequest) -> Result<(User, String)> {
        request.validate()?;

        if self.db.users.find_by_email(&request.email).await?.is_some() {
            return Err(ApiError::AlreadyRegistered(
                "Email already registered".to_string(),
            ));
        }

        let password_hash = self.auth.hash_password(&request.password)?;

        let user = self
            .db
            .users
            .create(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
            })
            .await
            .map_err(|e| {
                // concurrent signup with the same email lost the race
                if e.is_unique_violation() {
                    ApiError::AlreadyRegistered("Email already registered".to_string())
                } else {
                    e
                }
            })?;

        let token = self.auth.issue_token(user.id, TokenType::User)?;
        log_auth_event(&user.email, "signup", true);

        let (subject, html) = email::welcome_email(&user.name);
        if let Err(e) = self.email.send(&user.email, &subject, &html).await {
            warn!(email = %user.email, error = %e, "Failed to send welcome email");
        }

        Ok((user, token))
    }

    /// Verify user credentials and issue a token
    pub async fn login(&self, request: LoginRequest) -> Result<(User, String)> {
        request.validate()?;

        let user = self.db.users.find_by_email(&request.email).await?;
        let Some(user) = user else {
            log_auth_event(&request.email, "login", false);
            return Err(ApiError::Authentication(
                "Invalid email or password".to_string(),
            ));
        };

        if !self
            .auth
            .verify_password(&request.password, &user.password_hash)?
        {
            log_auth_event(&request.email, "login", false);
            return Err(ApiError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.auth.issue_token(user.id, TokenType::User)?;
        log_auth_event(&user.email, "login", true);

        Ok((user, token))
    }

    /// Verify admin credentials and issue an admin token
    pub async fn admin_login(&self, request: LoginRequest) -> Result<(Admin, String)> {
        request.validate()?;

        let admin = self.db.admins.find_by_email(&request.email).await?;
        let Some(admin) = admin else {
            log_auth_event(&request.email, "admin_login", false);
            return Err(ApiError::Authentication("Invalid credentials".to_string()));
        };

        if !self
            .auth
            .verify_password(&request.password, &admin.password_hash)?
        {
            log_auth_event(&request.email, "admin_login", false);
            return Err(ApiError::Authentication("Invalid credentials".to_string()));
        }

        let token = self.auth.issue_token(admin.id, TokenType::Admin)?;
        log_auth_event(&admin.email, "admin_login", true);

        Ok((admin, token))
    }

    /// Start a password reset. Succeeds whether or not the email exists, so
    /// the endpoint cannot be used to probe for accounts.
    pub async fn forgot_password(&self, request: ForgotPasswordRequest) -> Result<()> {
        request.validate()?;

        let Some(user) = self.db.users.find_by_email(&request.email).await? else {
            info!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = self.auth.generate_reset_token();
        let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);
        self.db
            .password_resets
            .create(&user.email, &token, expires_at)
            .await?;

        let (subject, html) = email::password_reset_email(&token);
        if let Err(e) = self.email.send(&user.email, &subject, &html).await {
            warn!(email = %user.email, error = %e, "Failed to send password reset email");
        }

        Ok(())
    }

    /// Complete a password reset using the emailed token
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<()> {
        request.validate()?;

        let reset = self
            .db
            .password_resets
            .find_by_token(&request.token)
            .await?
            .ok_or_else(|| ApiError::InvalidInput("Invalid or expired reset token".to_string()))?;

        if reset.is_expired(Utc::now()) {
            self.db.password_resets.delete(reset.id).await?;
            return Err(ApiError::InvalidInput(
                "Invalid or expired reset token".to_string(),
            ));
        }

        let user = self
            .db
            .users
            .find_by_email(&reset.email)
            .await?
            .ok_or_else(|| ApiError::InvalidInput("Invalid or expired reset token".to_string()))?;

        let password_hash = self.auth.hash_password(&request.password)?;
        self.db
            .users
            .update_password_hash(user.id, &password_hash)
            .await?;
        self.db.password_resets.delete(reset.id).await?;

        log_auth_event(&user.email, "password_reset", true);
        Ok(())
    }

    /// Update the mutable profile fields
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User> {
        request.validate()?;

        self.db
            .users
            .update_profile(user_id, request)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}

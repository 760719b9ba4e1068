//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{ApiError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_auth_config(&settings.auth)?;
    validate_email_config(&settings.email)?;
    validate_admin_seed_config(&settings.admin_seed)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(ApiError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(ApiError::Config("Server port must be non-zero".to_string()));
    }

    for origin in &config.cors_origins {
        Url::parse(origin)
            .map_err(|e| ApiError::Config(format!("Invalid CORS origin {origin}: {e}")))?;
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ApiError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(ApiError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(ApiError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate authentication configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.jwt_secret.len() < 16 {
        return Err(ApiError::Config(
            "JWT secret must be at least 16 characters".to_string(),
        ));
    }

    if config.token_ttl_days <= 0 {
        return Err(ApiError::Config(
            "Token TTL must be greater than 0 days".to_string(),
        ));
    }

    // bcrypt rejects costs outside 4..=31 at hash time; fail early instead
    if !(4..=31).contains(&config.bcrypt_cost) {
        return Err(ApiError::Config(
            "bcrypt cost must be between 4 and 31".to_string(),
        ));
    }

    Ok(())
}

/// Validate email configuration
fn validate_email_config(config: &super::EmailConfig) -> Result<()> {
    Url::parse(&config.api_url)
        .map_err(|e| ApiError::Config(format!("Invalid email API URL: {e}")))?;

    if config.from_address.is_empty() {
        return Err(ApiError::Config(
            "Email sender address is required".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(ApiError::Config(
            "Email timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate the seeded admin account
fn validate_admin_seed_config(config: &super::AdminSeedConfig) -> Result<()> {
    if config.email.is_empty() {
        return Err(ApiError::Config("Admin seed email is required".to_string()));
    }

    if config.password.len() < 6 {
        return Err(ApiError::Config(
            "Admin seed password must be at least 6 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ApiError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ApiError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

//! Configuration management module

pub mod settings;
pub mod validation;

pub use settings::{
    AdminSeedConfig, AuthConfig, DatabaseConfig, EmailConfig, LoggingConfig, ServerConfig, Settings,
};

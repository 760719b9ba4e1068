//! Error handling for the TechFest backend
//!
//! This module defines the main error type used throughout the application
//! and its mapping onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Main error type for the TechFest backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("{0}")]
    Authentication(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    AlreadyRegistered(String),

    #[error("Too many requests, please try again later")]
    RateLimitExceeded,

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for TechFest operations
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::AlreadyRegistered(_) => StatusCode::BAD_REQUEST,
            ApiError::AuthenticationRequired | ApiError::Authentication(_) | ApiError::Token(_) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to API clients. Internal failures are masked.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Database(_)
            | ApiError::Migration(_)
            | ApiError::Config(_)
            | ApiError::PasswordHash(_)
            | ApiError::Http(_)
            | ApiError::Serialization(_)
            | ApiError::Io(_)
            | ApiError::UrlParse(_) => "Internal server error".to_string(),
            ApiError::Token(_) => "Invalid token".to_string(),
            other => other.to_string(),
        }
    }

    /// True if the underlying sqlx error is a unique-constraint violation.
    ///
    /// Register-once guarantees are backed by unique indexes; a violation
    /// means a concurrent request won the race, not a server fault.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            ApiError::Database(sqlx::Error::Database(db_err)) => db_err
                .code()
                .map(|code| code == "23505")
                .unwrap_or(false),
            _ => false,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "message": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::InvalidInput("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::AlreadyRegistered("dup".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Authentication("nope".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::RateLimitExceeded.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::Config("missing".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_are_masked() {
        let err = ApiError::Config("jwt secret is empty".into());
        assert_eq!(err.public_message(), "Internal server error");

        let err = ApiError::InvalidInput("Invalid email address".into());
        assert_eq!(err.public_message(), "Invalid email address");
    }

    #[derive(Debug)]
    struct StubDbError {
        code: &'static str,
        kind: sqlx::error::ErrorKind,
    }

    impl std::fmt::Display for StubDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "database error with SQLSTATE {}", self.code)
        }
    }

    impl std::error::Error for StubDbError {}

    impl sqlx::error::DatabaseError for StubDbError {
        fn message(&self) -> &str {
            "stub database error"
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(self.code.into())
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            use sqlx::error::ErrorKind;
            match self.kind {
                ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
                ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
                ErrorKind::NotNullViolation => ErrorKind::NotNullViolation,
                ErrorKind::CheckViolation => ErrorKind::CheckViolation,
                _ => ErrorKind::Other,
            }
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    fn database_error(code: &'static str, kind: sqlx::error::ErrorKind) -> ApiError {
        ApiError::Database(sqlx::Error::Database(Box::new(StubDbError { code, kind })))
    }

    #[test]
    fn test_unique_violation_detected_by_sqlstate() {
        let err = database_error("23505", sqlx::error::ErrorKind::UniqueViolation);
        assert!(err.is_unique_violation());
    }

    #[test]
    fn test_other_database_errors_are_not_unique_violations() {
        // serialization failure: a lost race, but not a duplicate row
        let err = database_error("40001", sqlx::error::ErrorKind::Other);
        assert!(!err.is_unique_violation());

        assert!(!ApiError::Database(sqlx::Error::PoolTimedOut).is_unique_violation());
        assert!(!ApiError::RateLimitExceeded.is_unique_violation());
    }
}

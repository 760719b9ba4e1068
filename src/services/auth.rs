//! Authentication service implementation
//!
//! Handles password hashing and verification (bcrypt) and JWT issuance and
//! validation for the two principal kinds, users and admins. A token is only
//! accepted by the guard matching its `token_type`, so a user token can never
//! reach an admin endpoint.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::utils::errors::{ApiError, Result};

/// Principal kind carried in a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    User,
    Admin,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::User => write!(f, "user"),
            TokenType::Admin => write!(f, "admin"),
        }
    }
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal id (user or admin UUID)
    pub sub: Uuid,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
}

/// Authentication service for credentials and tokens
#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Hash a plaintext password
    pub fn hash_password(&self, password: &str) -> Result<String> {
        Ok(bcrypt::hash(password, self.config.bcrypt_cost)?)
    }

    /// Verify a plaintext password against a stored hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        Ok(bcrypt::verify(password, hash)?)
    }

    /// Issue a signed token for a principal
    pub fn issue_token(&self, subject: Uuid, token_type: TokenType) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject,
            token_type,
            iat: now.timestamp(),
            exp: (now + Duration::days(self.config.token_ttl_days)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;

        debug!(subject = %subject, token_type = %token_type, "Token issued");
        Ok(token)
    }

    /// Validate a token and require the expected principal kind
    pub fn verify_token(&self, token: &str, expected: TokenType) -> Result<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )?;

        if data.claims.token_type != expected {
            return Err(ApiError::Authentication("Invalid token type".to_string()));
        }

        Ok(data.claims)
    }

    /// Generate an opaque password reset token (32 random bytes, hex)
    pub fn generate_reset_token(&self) -> String {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

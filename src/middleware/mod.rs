//! Middleware module
//!
//! Request guards and cross-cutting request handling

pub mod auth;
pub mod logging;
pub mod rate_limit;

pub use auth::{AuthAdmin, AuthUser};
pub use rate_limit::{RateLimitConfig, RateLimiter};

//! Shared application state for HTTP handlers

use crate::config::Settings;
use crate::database::DatabaseService;
use crate::middleware::rate_limit::RateLimiter;
use crate::services::ServiceFactory;

/// State handed to every handler via axum's `State` extractor.
///
/// Cloning is cheap: repositories share the pool and the rate limiter shares
/// its table.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub db: DatabaseService,
    pub services: ServiceFactory,
    pub auth_limiter: RateLimiter,
}

impl AppState {
    pub fn new(settings: Settings, db: DatabaseService, services: ServiceFactory) -> Self {
        Self {
            settings,
            db,
            services,
            auth_limiter: RateLimiter::default(),
        }
    }
}

//! HTTP handlers
//!
//! Route assembly plus one module per API area. Authentication is enforced
//! by the `AuthUser`/`AuthAdmin` extractors, so protected routes declare
//! their principal in the handler signature instead of a route layer.

pub mod admin;
pub mod auth;
pub mod hackathon;
pub mod user;
pub mod workshop;

use axum::extract::State;
use axum::http::{HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware::logging::log_requests;
use crate::state::AppState;
use crate::utils::errors::{ApiError, Result};

/// Assemble the full application router
pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.settings.server.cors_origins)?;

    let router = Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/user/registrations", get(user::registrations))
        .route("/api/user/profile", patch(user::update_profile))
        .route("/api/hackathon/register", post(hackathon::register))
        .route("/api/workshop/register", post(workshop::register))
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/stats", get(admin::stats))
        .route("/api/admin/hackathon", get(admin::list_hackathon))
        .route("/api/admin/hackathon/:id", delete(admin::delete_hackathon))
        .route("/api/admin/workshop", get(admin::list_workshop))
        .route("/api/admin/workshop/:id", delete(admin::delete_workshop))
        .route("/api/admin/export/hackathon", get(admin::export_hackathon))
        .route("/api/admin/export/workshop", get(admin::export_workshop))
        .route("/api/admin/export/users", get(admin::export_users))
        .layer(from_fn(log_requests))
        .layer(cors)
        .with_state(state);

    Ok(router)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let parsed = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ApiError::Config(format!("Invalid CORS origin: {origin}")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any))
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = match state.db.health_check().await {
        Ok(()) => "up",
        Err(_) => "down",
    };

    Json(json!({
        "status": "ok",
        "service": crate::NAME,
        "version": crate::VERSION,
        "database": database,
    }))
}

//! Admin dashboard endpoints
//!
//! Login, dashboard stats, registration listing/deletion, and CSV exports.
//! Everything past login requires an admin token via `AuthAdmin`.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::AuthAdmin;
use crate::models::{
    normalize_email, DashboardStats, HackathonRegistrationWithMembers, LoginRequest,
    WorkshopRegistration,
};
use crate::state::AppState;
use crate::utils::errors::Result;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>> {
    state.auth_limiter.check(&normalize_email(&request.email))?;

    let (admin, token) = state.services.user_service.admin_login(request).await?;
    Ok(Json(json!({ "admin": admin, "token": token })))
}

pub async fn stats(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<DashboardStats>> {
    let stats = state.services.registration_service.stats().await?;
    Ok(Json(stats))
}

pub async fn list_hackathon(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<Vec<HackathonRegistrationWithMembers>>> {
    let registrations = state.services.registration_service.list_hackathon().await?;
    Ok(Json(registrations))
}

pub async fn delete_hackathon(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    state
        .services
        .registration_service
        .delete_hackathon(auth.admin_id, id)
        .await?;
    Ok(Json(json!({ "message": "Registration deleted" })))
}

pub async fn list_workshop(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<Vec<WorkshopRegistration>>> {
    let registrations = state.services.registration_service.list_workshop().await?;
    Ok(Json(registrations))
}

pub async fn delete_workshop(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    state
        .services
        .registration_service
        .delete_workshop(auth.admin_id, id)
        .await?;
    Ok(Json(json!({ "message": "Registration deleted" })))
}

pub async fn export_hackathon(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Response> {
    let body = state
        .services
        .registration_service
        .export_hackathon_csv()
        .await?;
    Ok(csv_attachment("hackathon_registrations.csv", body))
}

pub async fn export_workshop(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Response> {
    let body = state
        .services
        .registration_service
        .export_workshop_csv()
        .await?;
    Ok(csv_attachment("workshop_registrations.csv", body))
}

pub async fn export_users(State(state): State<AppState>, _auth: AuthAdmin) -> Result<Response> {
    let body = state.services.registration_service.export_users_csv().await?;
    Ok(csv_attachment("users_export.csv", body))
}

fn csv_attachment(filename: &str, body: String) -> Response {
    (
        [
            (CONTENT_TYPE, "text/csv".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        body,
    )
        .into_response()
}

//! Account endpoints for the authenticated user

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::middleware::AuthUser;
use crate::models::{UpdateProfileRequest, UserRegistrations};
use crate::state::AppState;
use crate::utils::errors::Result;

pub async fn registrations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserRegistrations>> {
    let registrations = state
        .services
        .registration_service
        .user_registrations(auth.user_id)
        .await?;
    Ok(Json(registrations))
}

pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Value>> {
    let user = state
        .services
        .user_service
        .update_profile(auth.user_id, request)
        .await?;
    Ok(Json(json!({ "user": user })))
}

//! User authentication endpoints

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::models::{
    normalize_email, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
};
use crate::state::AppState;
use crate::utils::errors::Result;

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<Value>> {
    state.auth_limiter.check(&normalize_email(&request.email))?;

    let (user, token) = state.services.user_service.signup(request).await?;
    Ok(Json(json!({ "user": user, "token": token })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>> {
    state.auth_limiter.check(&normalize_email(&request.email))?;

    let (user, token) = state.services.user_service.login(request).await?;
    Ok(Json(json!({ "user": user, "token": token })))
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Json<Value>> {
    state.auth_limiter.check(&normalize_email(&request.email))?;

    state.services.user_service.forgot_password(request).await?;
    Ok(Json(json!({
        "message": "If email exists, reset link will be sent"
    })))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<Value>> {
    state.services.user_service.reset_password(request).await?;
    Ok(Json(json!({ "message": "Password reset successful" })))
}

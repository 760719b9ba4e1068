//! Hackathon team registration endpoint

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::middleware::AuthUser;
use crate::models::HackathonForm;
use crate::state::AppState;
use crate::utils::errors::Result;

pub async fn register(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(form): Json<HackathonForm>,
) -> Result<Json<Value>> {
    let registration = state
        .services
        .registration_service
        .register_hackathon(auth.user_id, form)
        .await?;
    Ok(Json(json!({
        "message": "Registration successful",
        "registration": registration,
    })))
}

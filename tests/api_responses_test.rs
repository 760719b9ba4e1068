//! Wire-format contract tests
//!
//! The frontend consumes camelCase JSON and depends on the exact error
//! envelope; these tests pin both down without a running server.

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use techfest::models::{
    DashboardStats, HackathonMember, HackathonRegistration, HackathonRegistrationWithMembers,
    User, UserRegistrations,
};
use techfest::ApiError;

async fn response_parts(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_error_envelope_is_message_object() {
    let (status, body) =
        response_parts(ApiError::AlreadyRegistered("Email already registered".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Email already registered" }));
}

#[tokio::test]
async fn test_internal_errors_are_masked() {
    let (status, body) = response_parts(ApiError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal server error" }));
}

#[tokio::test]
async fn test_auth_errors_map_to_401() {
    let (status, body) = response_parts(ApiError::AuthenticationRequired).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Authentication required" }));

    let (status, _) =
        response_parts(ApiError::Authentication("Invalid email or password".into())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rate_limit_maps_to_429() {
    let (status, _) = response_parts(ApiError::RateLimitExceeded).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Asha Verma".to_string(),
        email: "asha@college.edu".to_string(),
        password_hash: "$2b$12$secret-hash".to_string(),
        phone: Some("9876543210".to_string()),
        college: None,
        year: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap(),
    }
}

#[test]
fn test_user_json_is_camel_case_without_password() {
    let value = serde_json::to_value(sample_user()).unwrap();

    assert!(value.get("createdAt").is_some());
    assert!(value.get("passwordHash").is_none());
    assert!(value.get("password_hash").is_none());
}

#[test]
fn test_stats_json_field_names() {
    let value = serde_json::to_value(DashboardStats {
        total_users: 12,
        total_hackathon_teams: 3,
        total_workshop_participants: 7,
    })
    .unwrap();

    assert_eq!(
        value,
        json!({
            "totalUsers": 12,
            "totalHackathonTeams": 3,
            "totalWorkshopParticipants": 7,
        })
    );
}

#[test]
fn test_registration_with_members_is_flattened() {
    let registration = HackathonRegistration {
        id: Uuid::new_v4(),
        team_name: "Null Pointers".to_string(),
        leader_id: Uuid::new_v4(),
        leader_name: "Asha Verma".to_string(),
        leader_email: "asha@college.edu".to_string(),
        leader_phone: "9876543210".to_string(),
        leader_college: "IIT".to_string(),
        leader_year: "3".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    };
    let id = registration.id;
    let value = serde_json::to_value(HackathonRegistrationWithMembers {
        registration,
        members: vec![HackathonMember {
            id: Uuid::new_v4(),
            registration_id: id,
            name: "Ravi".to_string(),
            email: "ravi@college.edu".to_string(),
            phone: "9876543211".to_string(),
        }],
    })
    .unwrap();

    // registration fields sit at the top level next to the members array
    assert_eq!(value["teamName"], "Null Pointers");
    assert_eq!(value["members"][0]["email"], "ravi@college.edu");
}

#[test]
fn test_empty_registrations_serialize_as_nulls() {
    let value = serde_json::to_value(UserRegistrations {
        hackathon: None,
        workshop: None,
    })
    .unwrap();

    assert_eq!(value, json!({ "hackathon": null, "workshop": null }));
}

//! Email delivery tests against a mocked Brevo API
//!
//! Verifies the request the service actually puts on the wire and the
//! handling of API failures. No real network access is involved.

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use techfest::config::EmailConfig;
use techfest::services::EmailService;
use techfest::ApiError;

fn email_config(api_url: String, api_key: Option<&str>) -> EmailConfig {
    EmailConfig {
        api_url,
        api_key: api_key.map(|k| k.to_string()),
        from_name: "TechFest".to_string(),
        from_address: "noreply@techfest.example".to_string(),
        timeout_seconds: 5,
    }
}

#[tokio::test]
async fn test_send_posts_expected_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/smtp/email"))
        .and(header("api-key", "test-api-key"))
        .and(body_partial_json(json!({
            "sender": { "email": "noreply@techfest.example" },
            "to": [{ "email": "asha@college.edu" }],
            "subject": "Welcome to TechFest 2025!",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let config = email_config(format!("{}/v3/smtp/email", server.uri()), Some("test-api-key"));
    let service = EmailService::new(config).unwrap();

    service
        .send(
            "asha@college.edu",
            "Welcome to TechFest 2025!",
            "<h1>Welcome, Asha!</h1>",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_html_content_field_is_camel_case() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "htmlContent": "<p>Hi</p>" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let config = email_config(server.uri(), Some("test-api-key"));
    let service = EmailService::new(config).unwrap();

    service
        .send("asha@college.edu", "Hello", "<p>Hi</p>")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_api_error_surfaces_as_service_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let config = email_config(server.uri(), Some("test-api-key"));
    let service = EmailService::new(config).unwrap();

    let err = service
        .send("asha@college.edu", "Hello", "<p>Hi</p>")
        .await
        .unwrap_err();
    assert_matches!(err, ApiError::ServiceUnavailable(_));
}

#[tokio::test]
async fn test_no_api_key_skips_network_entirely() {
    let server = MockServer::start().await;

    // no mock mounted; any request would 404 and fail the send
    let config = email_config(server.uri(), None);
    let service = EmailService::new(config).unwrap();

    assert!(!service.is_enabled());
    service
        .send("asha@college.edu", "Hello", "<p>Hi</p>")
        .await
        .unwrap();
}

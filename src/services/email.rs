//! Transactional email service
//!
//! Sends mail through the Brevo HTTP API. Without an API key the service
//! degrades to logging the message, so local development needs no credentials.
//! Delivery failures are logged and swallowed by callers; a lost confirmation
//! email must never fail a registration.

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::EmailConfig;
use crate::models::{HackathonForm, WorkshopForm};
use crate::utils::errors::{ApiError, Result};

#[derive(Debug, Clone, Serialize)]
struct BrevoParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoMessage {
    sender: BrevoParty,
    to: Vec<BrevoParty>,
    subject: String,
    html_content: String,
}

/// Email service backed by the Brevo API
#[derive(Debug, Clone)]
pub struct EmailService {
    client: Client,
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("techfest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Http)?;

        if config.api_key.is_some() {
            info!("Email service ready (Brevo API)");
        } else {
            warn!("No email API key configured, mail will be logged to console only");
        }

        Ok(Self { client, config })
    }

    /// True when a real delivery backend is configured
    pub fn is_enabled(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send one HTML email
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        let Some(api_key) = &self.config.api_key else {
            info!(to = to, subject = subject, "Email (console fallback)");
            debug!(content = html, "Email body");
            return Ok(());
        };

        let message = BrevoMessage {
            sender: BrevoParty {
                name: Some(self.config.from_name.clone()),
                email: self.config.from_address.clone(),
            },
            to: vec![BrevoParty {
                name: None,
                email: to.to_string(),
            }],
            subject: subject.to_string(),
            html_content: html.to_string(),
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .header("api-key", api_key)
            .header("accept", "application/json")
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(to = to, status = %status, body = %body, "Email API rejected message");
            return Err(ApiError::ServiceUnavailable(format!(
                "Email API returned {status}"
            )));
        }

        info!(to = to, subject = subject, "Email sent");
        Ok(())
    }
}

/// Welcome mail sent after signup
pub fn welcome_email(name: &str) -> (String, String) {
    (
        "Welcome to TechFest 2025!".to_string(),
        format!(
            "<h1>Welcome, {name}!</h1>\
             <p>Your account has been created successfully. You can now register for events.</p>"
        ),
    )
}

/// Confirmation mail for a hackathon team registration
pub fn hackathon_confirmation(form: &HackathonForm) -> (String, String) {
    (
        "Hackathon Registration Confirmed - TechFest 2025".to_string(),
        format!(
            "<h1>Registration Confirmed!</h1>\
             <p>Hi {leader},</p>\
             <p>Your team <strong>{team}</strong> has been successfully registered for Hackathon 2025!</p>\
             <h3>Team Details:</h3>\
             <ul>\
             <li>Team Name: {team}</li>\
             <li>Team Leader: {leader}</li>\
             <li>Total Members: {total}</li>\
             </ul>\
             <p>Event Date: March 15-17, 2025</p>\
             <p>We're excited to have you!</p>",
            leader = form.leader_name,
            team = form.team_name,
            total = form.members.len() + 1,
        ),
    )
}

/// Confirmation mail for a workshop registration
pub fn workshop_confirmation(form: &WorkshopForm) -> (String, String) {
    (
        "Workshop Registration Confirmed - TechFest 2025".to_string(),
        format!(
            "<h1>Registration Confirmed!</h1>\
             <p>Hi {name},</p>\
             <p>You have been successfully registered for the Python Workshop!</p>\
             <h3>Your Details:</h3>\
             <ul>\
             <li>Name: {name}</li>\
             <li>Email: {email}</li>\
             <li>College: {college}</li>\
             </ul>\
             <p>Event Date: April 5-6, 2025</p>\
             <p>You will receive a certificate upon completion.</p>\
             <p>We're excited to have you!</p>",
            name = form.name,
            email = form.email,
            college = form.college,
        ),
    )
}

/// Password reset mail carrying the opaque token link
pub fn password_reset_email(token: &str) -> (String, String) {
    (
        "Password Reset - TechFest 2025".to_string(),
        format!(
            "<h1>Password Reset</h1>\
             <p>Click the link to reset your password: \
             <a href=\"/reset-password?token={token}\">Reset Password</a></p>\
             <p>This link expires in 1 hour.</p>"
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<String>, api_url: &str) -> EmailConfig {
        EmailConfig {
            api_url: api_url.to_string(),
            api_key,
            from_name: "TechFest".to_string(),
            from_address: "noreply@techfest.example".to_string(),
            timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_console_fallback_without_key() {
        let service = EmailService::new(config(None, "https://api.brevo.com/v3/smtp/email")).unwrap();
        assert!(!service.is_enabled());
        // no key, no network call, always succeeds
        service
            .send("asha@college.edu", "Hello", "<p>Hi</p>")
            .await
            .unwrap();
    }

    #[test]
    fn test_recipient_without_name_omits_the_field() {
        let message = BrevoMessage {
            sender: BrevoParty {
                name: Some("TechFest".to_string()),
                email: "noreply@techfest.example".to_string(),
            },
            to: vec![BrevoParty {
                name: None,
                email: "asha@college.edu".to_string(),
            }],
            subject: "Hello".to_string(),
            html_content: "<p>Hi</p>".to_string(),
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["sender"]["name"], "TechFest");
        assert_eq!(value["to"][0], serde_json::json!({ "email": "asha@college.edu" }));
    }

    #[test]
    fn test_templates_mention_subject_details() {
        let (subject, html) = welcome_email("Asha");
        assert!(subject.contains("Welcome"));
        assert!(html.contains("Asha"));

        let (_, html) = password_reset_email("deadbeef");
        assert!(html.contains("token=deadbeef"));
    }
}

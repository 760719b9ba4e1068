//! CSV export builders for the admin dashboard
//!
//! Every field is quoted and embedded quotes are doubled (RFC 4180), unlike
//! the spreadsheet-hostile ad-hoc joining the dashboard used to get.

use crate::models::{HackathonRegistrationWithMembers, User, WorkshopRegistration};

/// Quote a single CSV field, doubling any embedded quotes.
pub fn escape_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Join pre-escaped fields into a CSV row.
fn row(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Build the hackathon registrations export, one row per team.
///
/// Member names, emails and phones are collapsed into single columns joined
/// with `"; "`.
pub fn hackathon_csv(registrations: &[HackathonRegistrationWithMembers]) -> String {
    let mut csv = String::from(
        "Team Name,Leader Name,Leader Email,Leader Phone,Leader College,Leader Year,Member Names,Member Emails,Member Phones\n",
    );

    for reg in registrations {
        let member_names = reg
            .members
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let member_emails = reg
            .members
            .iter()
            .map(|m| m.email.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let member_phones = reg
            .members
            .iter()
            .map(|m| m.phone.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        csv.push_str(&row(&[
            &reg.registration.team_name,
            &reg.registration.leader_name,
            &reg.registration.leader_email,
            &reg.registration.leader_phone,
            &reg.registration.leader_college,
            &reg.registration.leader_year,
            &member_names,
            &member_emails,
            &member_phones,
        ]));
    }

    csv
}

/// Build the workshop registrations export.
pub fn workshop_csv(registrations: &[WorkshopRegistration]) -> String {
    let mut csv = String::from("Name,Email,Phone,College,Registered At\n");

    for reg in registrations {
        csv.push_str(&row(&[
            &reg.name,
            &reg.email,
            &reg.phone,
            &reg.college,
            &reg.created_at.to_rfc3339(),
        ]));
    }

    csv
}

/// Build the users export.
pub fn users_csv(users: &[User]) -> String {
    let mut csv = String::from("ID,Name,Email,Created On\n");

    for user in users {
        csv.push_str(&row(&[
            &user.id.to_string(),
            &user.name,
            &user.email,
            &user.created_at.to_rfc3339(),
        ]));
    }

    csv
}

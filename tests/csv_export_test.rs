//! CSV export formatting tests
//!
//! The exports are consumed by spreadsheet software; every field must be
//! quoted and embedded quotes doubled, including fields that contain commas,
//! quotes or newlines.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use techfest::models::{
    HackathonMember, HackathonRegistration, HackathonRegistrationWithMembers, User,
    WorkshopRegistration,
};
use techfest::utils::csv;

fn registration(team_name: &str, leader_name: &str) -> HackathonRegistration {
    HackathonRegistration {
        id: Uuid::new_v4(),
        team_name: team_name.to_string(),
        leader_id: Uuid::new_v4(),
        leader_name: leader_name.to_string(),
        leader_email: "lead@college.edu".to_string(),
        leader_phone: "9876543210".to_string(),
        leader_college: "IIT".to_string(),
        leader_year: "3".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    }
}

fn member(registration_id: Uuid, name: &str, email: &str) -> HackathonMember {
    HackathonMember {
        id: Uuid::new_v4(),
        registration_id,
        name: name.to_string(),
        email: email.to_string(),
        phone: "9876543211".to_string(),
    }
}

#[test]
fn test_hackathon_export_header_and_member_joining() {
    let reg = registration("Null Pointers", "Asha Verma");
    let reg_id = reg.id;
    let rows = vec![HackathonRegistrationWithMembers {
        registration: reg,
        members: vec![
            member(reg_id, "Ravi", "ravi@college.edu"),
            member(reg_id, "Meera", "meera@college.edu"),
        ],
    }];

    let out = csv::hackathon_csv(&rows);
    let mut lines = out.lines();

    assert_eq!(
        lines.next().unwrap(),
        "Team Name,Leader Name,Leader Email,Leader Phone,Leader College,Leader Year,Member Names,Member Emails,Member Phones"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("\"Null Pointers\",\"Asha Verma\""));
    assert!(row.contains("\"Ravi; Meera\""));
    assert!(row.contains("\"ravi@college.edu; meera@college.edu\""));
    assert!(lines.next().is_none());
}

#[test]
fn test_hackathon_export_escapes_quotes_and_commas() {
    let rows = vec![HackathonRegistrationWithMembers {
        registration: registration("Team \"Rustaceans\"", "Verma, Asha"),
        members: vec![],
    }];

    let out = csv::hackathon_csv(&rows);
    let row = out.lines().nth(1).unwrap();

    assert!(row.starts_with("\"Team \"\"Rustaceans\"\"\",\"Verma, Asha\""));
    // empty member columns still present and quoted
    assert!(row.ends_with("\"\",\"\",\"\""));
}

#[test]
fn test_workshop_export() {
    let rows = vec![WorkshopRegistration {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: "Asha Verma".to_string(),
        email: "asha@college.edu".to_string(),
        phone: "9876543210".to_string(),
        college: "IIT, Delhi".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 0).unwrap(),
    }];

    let out = csv::workshop_csv(&rows);
    let mut lines = out.lines();

    assert_eq!(lines.next().unwrap(), "Name,Email,Phone,College,Registered At");
    let row = lines.next().unwrap();
    assert!(row.contains("\"IIT, Delhi\""));
    assert!(row.contains("2025-04-01T09:30:00"));
}

#[test]
fn test_users_export_never_contains_password_hash() {
    let users = vec![User {
        id: Uuid::new_v4(),
        name: "Asha Verma".to_string(),
        email: "asha@college.edu".to_string(),
        password_hash: "$2b$12$secret-hash".to_string(),
        phone: None,
        college: None,
        year: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap(),
    }];

    let out = csv::users_csv(&users);

    assert!(out.starts_with("ID,Name,Email,Created On\n"));
    assert!(out.contains("\"asha@college.edu\""));
    assert!(!out.contains("secret-hash"));
}

#[test]
fn test_empty_exports_are_header_only() {
    assert_eq!(csv::hackathon_csv(&[]).lines().count(), 1);
    assert_eq!(csv::workshop_csv(&[]).lines().count(), 1);
    assert_eq!(csv::users_csv(&[]).lines().count(), 1);
}

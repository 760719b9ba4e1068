//! Hackathon registration repository implementation
//!
//! A registration and its member rows are written in one transaction so a
//! team is never persisted half-formed.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    normalize_email, HackathonForm, HackathonMember, HackathonRegistration,
    HackathonRegistrationWithMembers,
};
use crate::utils::errors::ApiError;

#[derive(Debug, Clone)]
pub struct HackathonRepository {
    pool: PgPool,
}

impl HackathonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a registration plus its members atomically.
    ///
    /// The unique index on leader_id makes this the register-once point: a
    /// concurrent duplicate fails the INSERT and rolls the whole team back.
    pub async fn create_with_members(
        &self,
        leader_id: Uuid,
        form: &HackathonForm,
    ) -> Result<HackathonRegistrationWithMembers, ApiError> {
        let mut tx = self.pool.begin().await?;

        let registration = sqlx::query_as::<_, HackathonRegistration>(
            r#"
            INSERT INTO hackathon_registrations
                (id, team_name, leader_id, leader_name, leader_email, leader_phone, leader_college, leader_year, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, team_name, leader_id, leader_name, leader_email, leader_phone, leader_college, leader_year, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&form.team_name)
        .bind(leader_id)
        .bind(&form.leader_name)
        .bind(normalize_email(&form.leader_email))
        .bind(&form.leader_phone)
        .bind(&form.leader_college)
        .bind(&form.leader_year)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let mut members = Vec::with_capacity(form.members.len());
        for member in &form.members {
            let row = sqlx::query_as::<_, HackathonMember>(
                r#"
                INSERT INTO hackathon_members (id, registration_id, name, email, phone)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, registration_id, name, email, phone
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(registration.id)
            .bind(&member.name)
            .bind(normalize_email(&member.email))
            .bind(&member.phone)
            .fetch_one(&mut *tx)
            .await?;
            members.push(row);
        }

        tx.commit().await?;

        Ok(HackathonRegistrationWithMembers {
            registration,
            members,
        })
    }

    /// Find the registration led by a user
    pub async fn find_by_leader_id(
        &self,
        leader_id: Uuid,
    ) -> Result<Option<HackathonRegistration>, ApiError> {
        let registration = sqlx::query_as::<_, HackathonRegistration>(
            "SELECT id, team_name, leader_id, leader_name, leader_email, leader_phone, leader_college, leader_year, created_at FROM hackathon_registrations WHERE leader_id = $1",
        )
        .bind(leader_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Members of a registration
    pub async fn members_of(
        &self,
        registration_id: Uuid,
    ) -> Result<Vec<HackathonMember>, ApiError> {
        let members = sqlx::query_as::<_, HackathonMember>(
            "SELECT id, registration_id, name, email, phone FROM hackathon_members WHERE registration_id = $1",
        )
        .bind(registration_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// All registrations with members attached, newest first
    pub async fn list_with_members(
        &self,
    ) -> Result<Vec<HackathonRegistrationWithMembers>, ApiError> {
        let registrations = sqlx::query_as::<_, HackathonRegistration>(
            "SELECT id, team_name, leader_id, leader_name, leader_email, leader_phone, leader_college, leader_year, created_at FROM hackathon_registrations ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(registrations.len());
        for registration in registrations {
            let members = self.members_of(registration.id).await?;
            result.push(HackathonRegistrationWithMembers {
                registration,
                members,
            });
        }

        Ok(result)
    }

    /// Delete a registration; member rows go with it via ON DELETE CASCADE
    pub async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM hackathon_registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count registered teams
    pub async fn count(&self) -> Result<i64, ApiError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hackathon_registrations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

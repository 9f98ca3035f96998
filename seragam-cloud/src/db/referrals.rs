//! Referral attribution lookups
//!
//! Read-only joins used by the notification flows: code → agent → staff
//! contact email. `credit_worth_factor` on the code is the commission
//! multiplier frozen at redemption time.

use rust_decimal::Decimal;
use sqlx::PgPool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReferralCode {
    pub id: String,
    pub code: String,
    pub agent_id: String,
    pub credit_worth_factor: Decimal,
    pub created_at: i64,
}

/// An agent joined with their staff contact record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AgentContact {
    pub agent_id: String,
    pub full_name: String,
    pub email: String,
}

pub async fn find_code_by_code(
    pool: &PgPool,
    code: &str,
) -> Result<Option<ReferralCode>, sqlx::Error> {
    sqlx::query_as::<_, ReferralCode>("SELECT * FROM referral_codes WHERE code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await
}

pub async fn find_code_by_id(
    pool: &PgPool,
    id: &str,
) -> Result<Option<ReferralCode>, sqlx::Error> {
    sqlx::query_as::<_, ReferralCode>("SELECT * FROM referral_codes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_agent_contact(
    pool: &PgPool,
    agent_id: &str,
) -> Result<Option<AgentContact>, sqlx::Error> {
    sqlx::query_as::<_, AgentContact>(
        "SELECT a.id AS agent_id, s.full_name, s.email
         FROM agents a
         JOIN staff s ON s.id = a.staff_id
         WHERE a.id = $1",
    )
    .bind(agent_id)
    .fetch_optional(pool)
    .await
}

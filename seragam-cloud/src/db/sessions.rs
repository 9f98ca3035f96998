//! Print session persistence

use serde::Serialize;
use shared::session::SessionStatus;
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PrintSession {
    pub id: String,
    pub school_id: String,
    pub operator_id: Option<String>,
    pub status: String,
    #[serde(skip_serializing)]
    pub service_passcode: String,
    pub scheduled_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: i64,
}

pub async fn find_by_passcode(
    pool: &PgPool,
    service_passcode: &str,
) -> Result<Option<PrintSession>, sqlx::Error> {
    sqlx::query_as::<_, PrintSession>(
        "SELECT * FROM print_sessions WHERE service_passcode = $1",
    )
    .bind(service_passcode)
    .fetch_optional(pool)
    .await
}

/// Bind the operator running the session's on-site service day
pub async fn assign_operator(
    pool: &PgPool,
    id: &str,
    operator_id: &str,
) -> Result<Option<PrintSession>, sqlx::Error> {
    sqlx::query_as::<_, PrintSession>(
        "UPDATE print_sessions SET operator_id = $2 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(operator_id)
    .fetch_optional(pool)
    .await
}

/// Sparse merge from the admin dashboard; `None` when the row is missing
pub struct SessionUpdate<'a> {
    pub status: Option<SessionStatus>,
    pub operator_id: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub scheduled_date: Option<&'a str>,
}

pub async fn merge_update(
    pool: &PgPool,
    id: &str,
    update: &SessionUpdate<'_>,
) -> Result<Option<PrintSession>, sqlx::Error> {
    sqlx::query_as::<_, PrintSession>(
        "UPDATE print_sessions SET
            status = COALESCE($2, status),
            operator_id = COALESCE($3, operator_id),
            notes = COALESCE($4, notes),
            scheduled_date = COALESCE($5, scheduled_date)
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(update.status.map(|s| s.as_str()))
    .bind(update.operator_id)
    .bind(update.notes)
    .bind(update.scheduled_date)
    .fetch_optional(pool)
    .await
}

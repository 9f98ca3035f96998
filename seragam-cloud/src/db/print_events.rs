//! Immutable print event log

use shared::device::{GarmentType, PrintEventKind};
use sqlx::PgPool;

/// Fields for a new print event row
pub struct NewPrintEvent<'a> {
    pub id: &'a str,
    pub print_job_id: &'a str,
    pub machine_id: &'a str,
    pub kind: PrintEventKind,
    pub student_id: Option<&'a str>,
    pub garment_type: Option<GarmentType>,
    pub garment_count: Option<i32>,
    pub payload: &'a serde_json::Value,
    pub idempotency_key: &'a str,
    pub now: i64,
}

/// Insert an event unless its idempotency key was already seen.
///
/// Returns `true` when the row was inserted, `false` when the key
/// conflicted with an existing event. The `ON CONFLICT DO NOTHING` +
/// `rows_affected` shape makes the gate race-free: two concurrent
/// submissions of the same key cannot both insert.
pub async fn insert_if_absent(
    pool: &PgPool,
    event: &NewPrintEvent<'_>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO print_events
            (id, print_job_id, machine_id, event_type, student_id,
             garment_type, garment_count, payload, idempotency_key, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         ON CONFLICT (idempotency_key) DO NOTHING",
    )
    .bind(event.id)
    .bind(event.print_job_id)
    .bind(event.machine_id)
    .bind(event.kind.as_str())
    .bind(event.student_id)
    .bind(event.garment_type.map(|g| g.as_str()))
    .bind(event.garment_count)
    .bind(event.payload)
    .bind(event.idempotency_key)
    .bind(event.now)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Fetch the id of the event stored under an idempotency key
pub async fn find_id_by_key(
    pool: &PgPool,
    idempotency_key: &str,
) -> Result<Option<String>, sqlx::Error> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT id FROM print_events WHERE idempotency_key = $1")
            .bind(idempotency_key)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|r| r.0))
}

/// Printed garment totals for a student, summed over COMPLETE events.
///
/// This is the source of truth for the student's printed counters: the
/// counters are derived from the immutable log, never incremented in
/// place, so replayed events cannot double-count.
pub async fn printed_totals(
    pool: &PgPool,
    student_id: &str,
) -> Result<(i64, i64), sqlx::Error> {
    let row: (i64, i64) = sqlx::query_as(
        "SELECT
            COALESCE(SUM(garment_count) FILTER (WHERE garment_type = 'DARK'), 0),
            COALESCE(SUM(garment_count) FILTER (WHERE garment_type = 'LIGHT'), 0)
         FROM print_events
         WHERE student_id = $1 AND event_type = 'COMPLETE'",
    )
    .bind(student_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

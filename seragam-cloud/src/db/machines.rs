//! Machine registry and heartbeat persistence

use shared::device::HeartbeatPayload;
use sqlx::PgPool;

/// A registered printing device
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Machine {
    pub id: String,
    pub device_id: String,
    pub secret_key: String,
    pub is_online: bool,
    pub is_printing: bool,
    pub firmware_version: Option<String>,
    pub model: Option<String>,
    pub up_time: Option<i64>,
    pub sessions_held: Option<i32>,
    pub active_print_job: Option<String>,
    pub last_seen_at: Option<i64>,
}

/// Resolve a device identifier to its registry row (secret key included)
pub async fn find_by_device_id(
    pool: &PgPool,
    device_id: &str,
) -> Result<Option<Machine>, sqlx::Error> {
    sqlx::query_as::<_, Machine>("SELECT * FROM machines WHERE device_id = $1")
        .bind(device_id)
        .fetch_optional(pool)
        .await
}

/// Merge a sparse heartbeat into the machine row.
///
/// Absent optional fields leave the stored values untouched (COALESCE);
/// `is_online` and `last_seen_at` are always written.
pub async fn apply_heartbeat(
    pool: &PgPool,
    machine_id: &str,
    hb: &HeartbeatPayload,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE machines SET
            is_online = $2,
            is_printing = COALESCE($3, is_printing),
            firmware_version = COALESCE($4, firmware_version),
            model = COALESCE($5, model),
            up_time = COALESCE($6, up_time),
            sessions_held = COALESCE($7, sessions_held),
            active_print_job = COALESCE($8, active_print_job),
            last_seen_at = $9
         WHERE id = $1",
    )
    .bind(machine_id)
    .bind(hb.is_online)
    .bind(hb.is_printing)
    .bind(hb.firmware_version.as_deref())
    .bind(hb.model.as_deref())
    .bind(hb.up_time)
    .bind(hb.sessions_held)
    .bind(hb.active_session.as_deref())
    .bind(now)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Record the machine's printing state after a START or terminal event.
/// Last write wins; PROGRESS events never reach this function.
pub async fn set_printing_state(
    pool: &PgPool,
    machine_id: &str,
    is_printing: bool,
    active_print_job: Option<&str>,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE machines SET is_printing = $2, active_print_job = $3, last_seen_at = $4
         WHERE id = $1",
    )
    .bind(machine_id)
    .bind(is_printing)
    .bind(active_print_job)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

/// Append a location sample for a machine
pub async fn insert_location(
    pool: &PgPool,
    machine_id: &str,
    lat: f64,
    lng: f64,
    provider: Option<&str>,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO machine_locations (machine_id, lat, lng, provider, recorded_at)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(machine_id)
    .bind(lat)
    .bind(lng)
    .bind(provider)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

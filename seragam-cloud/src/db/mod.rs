//! Database access layer
//!
//! Free async functions per table, taking `&PgPool` and returning
//! `Result<_, sqlx::Error>`. Row structs derive `sqlx::FromRow` and
//! `serde::Serialize` where they go straight into a response body.

pub mod classes;
pub mod machines;
pub mod print_events;
pub mod referrals;
pub mod schools;
pub mod sessions;
pub mod staff;
pub mod students;

/// Current wall-clock time as epoch milliseconds, the timestamp format of
/// every BIGINT time column in the schema.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

//! Student (order item) persistence

use serde::Serialize;
use shared::session::ItemStatus;
use sqlx::PgPool;

/// One student's garment-printing work within an order
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: String,
    pub class_id: String,
    pub full_name: String,
    pub dark_garments_count: i32,
    pub light_garments_count: i32,
    pub printed_dark_garment_count: i32,
    pub printed_light_garment_count: i32,
    pub dark_garments_printed: bool,
    pub light_garments_printed: bool,
    pub is_served: bool,
    pub status: String,
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Sparse status merge from the operator tooling.
///
/// Absent fields leave stored values untouched. Returns the updated row,
/// or `None` when the student does not exist.
pub struct StudentStatusUpdate {
    pub printed_dark_garment_count: Option<i32>,
    pub printed_light_garment_count: Option<i32>,
    pub dark_garments_printed: Option<bool>,
    pub light_garments_printed: Option<bool>,
    pub is_served: Option<bool>,
}

pub async fn merge_status(
    pool: &PgPool,
    id: &str,
    update: &StudentStatusUpdate,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        "UPDATE students SET
            printed_dark_garment_count = COALESCE($2, printed_dark_garment_count),
            printed_light_garment_count = COALESCE($3, printed_light_garment_count),
            dark_garments_printed = COALESCE($4, dark_garments_printed),
            light_garments_printed = COALESCE($5, light_garments_printed),
            is_served = COALESCE($6, is_served)
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(update.printed_dark_garment_count)
    .bind(update.printed_light_garment_count)
    .bind(update.dark_garments_printed)
    .bind(update.light_garments_printed)
    .bind(update.is_served)
    .fetch_optional(pool)
    .await
}

/// Write reconciled counters and the derived status in one statement
pub async fn apply_reconciled_counts(
    pool: &PgPool,
    id: &str,
    printed_dark: i32,
    printed_light: i32,
    dark_done: bool,
    light_done: bool,
    status: ItemStatus,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        "UPDATE students SET
            printed_dark_garment_count = $2,
            printed_light_garment_count = $3,
            dark_garments_printed = $4,
            light_garments_printed = $5,
            status = $6
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(printed_dark)
    .bind(printed_light)
    .bind(dark_done)
    .bind(light_done)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await
}

/// Persist only the derived status column
pub async fn set_status(pool: &PgPool, id: &str, status: ItemStatus) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE students SET status = $2 WHERE id = $1")
        .bind(id)
        .bind(status.as_str())
        .execute(pool)
        .await?;
    Ok(())
}

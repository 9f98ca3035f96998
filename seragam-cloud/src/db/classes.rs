//! School class persistence

use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SchoolClass {
    pub id: String,
    pub session_id: String,
    pub name: String,
    pub grade: Option<String>,
    pub total_students_served_in_class: i32,
    pub is_attended: bool,
}

pub async fn list_by_session(
    pool: &PgPool,
    session_id: &str,
) -> Result<Vec<SchoolClass>, sqlx::Error> {
    sqlx::query_as::<_, SchoolClass>(
        "SELECT * FROM school_classes WHERE session_id = $1 ORDER BY name",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await
}

/// Sparse merge of class progress fields; `None` when the row is missing
pub async fn merge_status(
    pool: &PgPool,
    id: &str,
    total_students_served_in_class: Option<i32>,
    is_attended: Option<bool>,
) -> Result<Option<SchoolClass>, sqlx::Error> {
    sqlx::query_as::<_, SchoolClass>(
        "UPDATE school_classes SET
            total_students_served_in_class = COALESCE($2, total_students_served_in_class),
            is_attended = COALESCE($3, is_attended)
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(total_students_served_in_class)
    .bind(is_attended)
    .fetch_optional(pool)
    .await
}

//! School and order lookups

use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct School {
    pub id: String,
    pub name: String,
    pub referral_code_id: Option<String>,
    pub created_at: i64,
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<School>, sqlx::Error> {
    sqlx::query_as::<_, School>("SELECT * FROM schools WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// The ids of a school's chronologically first orders.
///
/// Limited to two rows: the first tells us which order came first, the
/// second only whether more exist. That is all the first-order check needs.
pub async fn earliest_order_ids(
    pool: &PgPool,
    school_id: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT id FROM orders WHERE school_id = $1 ORDER BY created_at ASC, id ASC LIMIT 2",
    )
    .bind(school_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(|r| r.0).collect())
}

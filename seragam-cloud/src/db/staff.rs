//! Staff persistence

use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Staff {
    pub id: String,
    pub auth_user_id: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub staff_code: String,
    pub created_at: i64,
}

pub struct NewStaff<'a> {
    pub id: &'a str,
    pub auth_user_id: &'a str,
    pub email: &'a str,
    pub full_name: &'a str,
    pub phone_number: Option<&'a str>,
    pub role: &'a str,
    pub staff_code: &'a str,
    pub now: i64,
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Staff>, sqlx::Error> {
    sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Staff>, sqlx::Error> {
    sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, staff: &NewStaff<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO staff
            (id, auth_user_id, email, full_name, phone_number, role, staff_code, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(staff.id)
    .bind(staff.auth_user_id)
    .bind(staff.email)
    .bind(staff.full_name)
    .bind(staff.phone_number)
    .bind(staff.role)
    .bind(staff.staff_code)
    .bind(staff.now)
    .execute(pool)
    .await?;
    Ok(())
}

//! Student endpoints
//!
//! POST /functions/v1/refresh-student-data  — fetch the current row
//! POST /functions/v1/update-student-status — operator progress updates

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;
use shared::error::{AppError, ErrorCode};
use shared::session::ItemStatus;

use crate::api;
use crate::db::students;
use crate::error::ServiceResult;
use crate::state::AppState;

// ── POST /functions/v1/refresh-student-data ──

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefreshStudentRequest {
    pub id: String,
}

pub async fn refresh_student_data(
    State(state): State<AppState>,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let req: RefreshStudentRequest = api::parse_json(&body)?;

    let student = students::find_by_id(&state.pool, &req.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StudentNotFound))?;

    Ok(Json(json!({
        "message": "Student data refreshed",
        "student": student,
    })))
}

// ── POST /functions/v1/update-student-status ──

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateStudentRequest {
    pub id: String,
    pub printed_dark_garment_count: Option<i32>,
    pub printed_light_garment_count: Option<i32>,
    pub dark_garments_printed: Option<bool>,
    pub light_garments_printed: Option<bool>,
    pub is_served: Option<bool>,
}

pub async fn update_student_status(
    State(state): State<AppState>,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let req: UpdateStudentRequest = api::parse_json(&body)?;

    let student = students::merge_status(
        &state.pool,
        &req.id,
        &students::StudentStatusUpdate {
            printed_dark_garment_count: req.printed_dark_garment_count,
            printed_light_garment_count: req.printed_light_garment_count,
            dark_garments_printed: req.dark_garments_printed,
            light_garments_printed: req.light_garments_printed,
            is_served: req.is_served,
        },
    )
    .await?
    .ok_or_else(|| AppError::new(ErrorCode::StudentNotFound))?;

    // Re-derive the coarse status from the merged counters
    let printed =
        i64::from(student.printed_dark_garment_count) + i64::from(student.printed_light_garment_count);
    let required =
        i64::from(student.dark_garments_count) + i64::from(student.light_garments_count);
    let derived = ItemStatus::derive(printed, required);

    let student = if student.status != derived.as_str() {
        students::set_status(&state.pool, &student.id, derived).await?;
        students::Student {
            status: derived.as_str().to_string(),
            ..student
        }
    } else {
        student
    };

    tracing::info!(student_id = %student.id, status = %student.status, "Student updated");

    Ok(Json(json!({
        "message": "Student updated",
        "student": student,
    })))
}

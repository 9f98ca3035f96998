//! Class endpoint
//!
//! POST /functions/v1/update-class-status — operator attendance/progress

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;
use shared::error::{AppError, ErrorCode};

use crate::api;
use crate::db::classes;
use crate::error::ServiceResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateClassRequest {
    pub id: String,
    pub total_students_served_in_class: Option<i32>,
    pub is_attended: Option<bool>,
}

pub async fn update_class_status(
    State(state): State<AppState>,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let req: UpdateClassRequest = api::parse_json(&body)?;

    let class = classes::merge_status(
        &state.pool,
        &req.id,
        req.total_students_served_in_class,
        req.is_attended,
    )
    .await?
    .ok_or_else(|| AppError::new(ErrorCode::ClassNotFound))?;

    tracing::info!(
        class_id = %class.id,
        served = class.total_students_served_in_class,
        "Class updated"
    );

    Ok(Json(json!({
        "message": "Class updated",
        "class": class,
    })))
}

//! Print session endpoints
//!
//! POST /functions/v1/init-session          — operator check-in at a school
//! POST /functions/v1/update-session-status — admin dashboard status moves

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;
use shared::error::{AppError, ErrorCode};
use shared::session::SessionStatus;

use crate::api;
use crate::db::{classes, schools, sessions, staff};
use crate::error::ServiceResult;
use crate::state::AppState;

// ── POST /functions/v1/init-session ──

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitSessionRequest {
    pub operator_id: String,
    pub service_passcode: String,
}

pub async fn init_session(
    State(state): State<AppState>,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let req: InitSessionRequest = api::parse_json(&body)?;

    if req.operator_id.trim().is_empty() || req.service_passcode.trim().is_empty() {
        return Err(
            AppError::validation("operator_id and service_passcode are required").into(),
        );
    }

    let operator = staff::find_by_id(&state.pool, &req.operator_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OperatorNotFound))?;

    let session = sessions::find_by_passcode(&state.pool, &req.service_passcode)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SessionNotFound))?;

    // Bind the operator to the session for the service day
    let session = sessions::assign_operator(&state.pool, &session.id, &operator.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SessionNotFound))?;

    let school = schools::find_by_id(&state.pool, &session.school_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SchoolNotFound))?;

    let classes = classes::list_by_session(&state.pool, &session.id).await?;

    tracing::info!(
        session_id = %session.id,
        operator_id = %operator.id,
        school = %school.name,
        "Session initialized"
    );

    Ok(Json(json!({
        "message": "Session initialized",
        "operator": operator,
        "session": session,
        "school": school,
        "classes": classes,
    })))
}

// ── POST /functions/v1/update-session-status ──

/// Strictly typed update payload: unknown keys are rejected rather than
/// merged into the stored row.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateSessionRequest {
    pub id: String,
    pub status: Option<String>,
    pub operator_id: Option<String>,
    pub notes: Option<String>,
    pub scheduled_date: Option<String>,
}

pub async fn update_session_status(
    State(state): State<AppState>,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let req: UpdateSessionRequest = api::parse_json(&body)?;

    let status = match req.status.as_deref() {
        Some(raw) => Some(
            raw.parse::<SessionStatus>()
                .map_err(|e| AppError::with_message(ErrorCode::SessionStatusInvalid, e))?,
        ),
        None => None,
    };

    let session = sessions::merge_update(
        &state.pool,
        &req.id,
        &sessions::SessionUpdate {
            status,
            operator_id: req.operator_id.as_deref(),
            notes: req.notes.as_deref(),
            scheduled_date: req.scheduled_date.as_deref(),
        },
    )
    .await?
    .ok_or_else(|| AppError::new(ErrorCode::SessionNotFound))?;

    tracing::info!(session_id = %session.id, status = %session.status, "Session updated");

    Ok(Json(json!({
        "message": "Session updated",
        "session": session,
    })))
}

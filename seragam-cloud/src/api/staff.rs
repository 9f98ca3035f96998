//! Admin staff-creation endpoint
//!
//! POST /functions/v1/create-staff — bearer-token authenticated, admin
//! role required. Account provisioning lives with the managed auth
//! provider; this endpoint records the staff row the dashboards read.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::Deserialize;
use serde_json::json;
use shared::error::{AppError, ErrorCode};

use crate::api;
use crate::auth;
use crate::db::{self, staff};
use crate::error::ServiceResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateStaffRequest {
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub role: String,
    /// Human-facing staff code printed on ID cards
    pub staff_id: String,
}

pub async fn create_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let claims = auth::require_admin(&headers, &state.jwt_secret)?;

    let req: CreateStaffRequest = api::parse_json(&body)?;

    let email = req.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::validation("Invalid email").into());
    }
    if req.full_name.trim().is_empty() {
        return Err(AppError::validation("fullName is required").into());
    }

    let id = uuid::Uuid::new_v4().to_string();
    let auth_user_id = uuid::Uuid::new_v4().to_string();
    let now = db::now_millis();

    let new_staff = staff::NewStaff {
        id: &id,
        auth_user_id: &auth_user_id,
        email: &email,
        full_name: req.full_name.trim(),
        phone_number: req.phone_number.as_deref(),
        role: &req.role,
        staff_code: &req.staff_id,
        now,
    };
    if let Err(e) = staff::create(&state.pool, &new_staff).await {
        // Downstream create failures surface as a client-visible 400
        tracing::error!(error = %e, email = %email, "Failed to create staff");
        return Err(AppError::with_message(
            ErrorCode::StaffCreateFailed,
            format!("Failed to create staff: {e}"),
        )
        .into());
    }

    tracing::info!(
        staff_id = %id,
        email = %email,
        created_by = %claims.sub,
        "Staff account created"
    );

    Ok(Json(json!({
        "success": true,
        "userId": auth_user_id,
        "staffId": id,
    })))
}

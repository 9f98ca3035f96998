//! Device heartbeat endpoint
//!
//! POST /functions/v1/device-heartbeat — merge a sparse status payload
//! into the device's machine record and optionally append a location
//! sample.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use serde_json::json;
use shared::device::HeartbeatPayload;
use shared::error::AppError;

use crate::api::{self, device};
use crate::db::{self, machines};
use crate::error::ServiceResult;
use crate::state::AppState;

pub async fn handle_heartbeat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let machine = device::authenticate_device(&state, &headers, &body).await?;

    let hb: HeartbeatPayload = api::parse_json(&body)?;

    let now = db::now_millis();
    let updated = machines::apply_heartbeat(&state.pool, &machine.id, &hb, now)
        .await
        .map_err(|e| AppError::database(format!("Failed to update device status: {e}")))?;
    if updated == 0 {
        // Row vanished between lookup and update; treat as an update failure
        return Err(AppError::database("Failed to update device status").into());
    }

    // Location samples are auxiliary: insert failure is logged, never fatal
    if let Some(location) = &hb.location {
        if let Err(e) = machines::insert_location(
            &state.pool,
            &machine.id,
            location.lat,
            location.lng,
            location.provider.as_deref(),
            now,
        )
        .await
        {
            tracing::warn!(
                device_id = %machine.device_id,
                error = %e,
                "Failed to record machine location"
            );
        }
    }

    tracing::debug!(device_id = %machine.device_id, is_online = hb.is_online, "Heartbeat applied");

    Ok(Json(json!({
        "success": true,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "device_id": machine.device_id,
    })))
}

//! Device-facing endpoints
//!
//! Both endpoints receive the RAW request body (`axum::body::Bytes`) so
//! the HMAC is computed over exactly the transmitted bytes, then
//! deserialize into the strict wire payloads.

pub mod heartbeat;
pub mod print_events;

use axum::body::Bytes;
use axum::http::HeaderMap;
use shared::error::{AppError, ErrorCode};
use shared::signature;

use crate::db::machines::{self, Machine};
use crate::error::ServiceResult;
use crate::state::AppState;

pub const DEVICE_ID_HEADER: &str = "x-device-id";
pub const DEVICE_SIGNATURE_HEADER: &str = "x-device-signature";

/// Resolve and authenticate the calling device.
///
/// - missing `x-device-id` → 400
/// - unknown device → 404 ("not registered" is a client error, not a fault)
/// - bad `x-device-signature` → 401
/// - absent signature header → verification skipped (permissive mode for
///   fleets still on unsigned firmware), logged so it stays visible
pub async fn authenticate_device(
    state: &AppState,
    headers: &HeaderMap,
    body: &Bytes,
) -> ServiceResult<Machine> {
    let device_id = headers
        .get(DEVICE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::validation("Missing x-device-id header"))?;

    let machine = machines::find_by_device_id(&state.pool, device_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DeviceNotRegistered))?;

    match headers.get(DEVICE_SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(sig) => {
            if !signature::verify(&machine.secret_key, body, sig) {
                tracing::warn!(device_id = device_id, "Device signature verification failed");
                return Err(AppError::invalid_signature().into());
            }
        }
        None => {
            tracing::warn!(
                device_id = device_id,
                "Request without signature header accepted (permissive mode)"
            );
        }
    }

    Ok(machine)
}

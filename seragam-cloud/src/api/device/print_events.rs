//! Print event ingestion endpoint
//!
//! POST /functions/v1/device-print-events — append a lifecycle event to
//! the immutable log, deduplicated by idempotency key, then apply the
//! machine-state and order-item side effects.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use serde_json::json;
use shared::device::{self, PrintEventRequest};
use shared::error::AppError;

use crate::api::{self, device as device_api};
use crate::db::{self, machines, print_events};
use crate::error::ServiceResult;
use crate::reconcile;
use crate::state::AppState;

pub async fn handle_print_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let machine = device_api::authenticate_device(&state, &headers, &body).await?;

    let req: PrintEventRequest = api::parse_json(&body)?;

    // Deduplication key: caller-supplied, else deterministic synthesis
    // (no time component, so genuine retries collapse onto one event)
    let idempotency_key = req.idempotency_key.clone().unwrap_or_else(|| {
        device::synthesize_idempotency_key(&machine.device_id, &req.print_job_id, req.kind)
    });

    let event_id = uuid::Uuid::new_v4().to_string();
    let now = db::now_millis();
    let payload_json = serde_json::to_value(&req.payload)
        .map_err(|e| AppError::internal(format!("Failed to serialize event payload: {e}")))?;

    let inserted = print_events::insert_if_absent(
        &state.pool,
        &print_events::NewPrintEvent {
            id: &event_id,
            print_job_id: &req.print_job_id,
            machine_id: &machine.id,
            kind: req.kind,
            student_id: req.payload.student_id.as_deref(),
            garment_type: req.payload.garment_type,
            garment_count: req.payload.garment_count,
            payload: &payload_json,
            idempotency_key: &idempotency_key,
            now,
        },
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to store print event: {e}")))?;

    if !inserted {
        // Replay: return the original event's identity, mutate nothing else
        let existing = print_events::find_id_by_key(&state.pool, &idempotency_key)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up print event: {e}")))?;
        tracing::info!(
            device_id = %machine.device_id,
            idempotency_key = %idempotency_key,
            "Duplicate print event, skipping"
        );
        return Ok(Json(json!({
            "success": true,
            "message": "Event already processed",
            "event_id": existing,
        })));
    }

    // Machine printing state: only START and terminal events move it,
    // last write wins. Best-effort: the event itself is already stored.
    let machine_update = if req.kind == shared::device::PrintEventKind::Start {
        Some((true, Some(req.print_job_id.as_str())))
    } else if req.kind.is_terminal() {
        Some((false, None))
    } else {
        None
    };
    if let Some((is_printing, active_job)) = machine_update {
        if let Err(e) =
            machines::set_printing_state(&state.pool, &machine.id, is_printing, active_job, now)
                .await
        {
            tracing::error!(
                device_id = %machine.device_id,
                error = %e,
                "Failed to update machine printing state"
            );
        }
    }

    // Order-item reconciliation for COMPLETE events carrying a garment count
    if req.kind == shared::device::PrintEventKind::Complete {
        if let (Some(student_id), Some(_), Some(_)) = (
            &req.payload.student_id,
            req.payload.garment_type,
            req.payload.garment_count,
        ) {
            reconcile::reconcile_best_effort(&state.pool, student_id).await;
        }
    }

    tracing::info!(
        device_id = %machine.device_id,
        print_job_id = %req.print_job_id,
        event_type = %req.kind,
        event_id = %event_id,
        "Print event recorded"
    );

    Ok(Json(json!({
        "success": true,
        "event_id": event_id,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}

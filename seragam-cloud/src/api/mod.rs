//! API routes
//!
//! Every function endpoint is a POST under `/functions/v1`, the path
//! shape the web app and device fleet already call. CORS preflight is
//! answered permissively for the browser dashboards.

pub mod agent_email;
pub mod class;
pub mod device;
pub mod health;
pub mod referral;
pub mod session;
pub mod staff;
pub mod student;

use axum::routing::{get, post};
use axum::Router;
use serde::de::DeserializeOwned;
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Device-facing endpoints (HMAC over the raw body)
    let device = Router::new()
        .route("/device-heartbeat", post(device::heartbeat::handle_heartbeat))
        .route(
            "/device-print-events",
            post(device::print_events::handle_print_events),
        );

    // Admin surface (bearer token, admin role)
    let admin = Router::new().route("/create-staff", post(staff::create_staff));

    // Service-role endpoints (called by the web app's trusted backend)
    let service = Router::new()
        .route("/init-session", post(session::init_session))
        .route("/update-session-status", post(session::update_session_status))
        .route("/refresh-student-data", post(student::refresh_student_data))
        .route("/update-student-status", post(student::update_student_status))
        .route("/update-class-status", post(class::update_class_status))
        .route("/notify-agent-code-used", post(referral::notify_agent_code_used))
        .route("/notify-first-order", post(referral::notify_first_order))
        .route("/send-agent-email", post(agent_email::send_agent_email));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/functions/v1", device.merge(admin).merge(service))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse a raw JSON body into a typed request.
///
/// Used instead of the `Json` extractor so every failure — malformed
/// JSON, missing fields, unknown keys — produces the platform's
/// `{"error": ...}` response shape.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))
}

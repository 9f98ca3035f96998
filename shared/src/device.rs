//! Device wire payloads
//!
//! The payloads printing devices POST to the cloud service. All payloads
//! are strict: unknown fields are rejected rather than silently merged
//! into the stored record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Print lifecycle event kinds
///
/// A job moves `IDLE → (START) → PRINTING → (COMPLETE|ERROR|CANCEL) → IDLE`.
/// PROGRESS events are recorded but do not change machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrintEventKind {
    Start,
    Progress,
    Complete,
    Error,
    Cancel,
}

impl PrintEventKind {
    pub const ALL: [PrintEventKind; 5] = [
        PrintEventKind::Start,
        PrintEventKind::Progress,
        PrintEventKind::Complete,
        PrintEventKind::Error,
        PrintEventKind::Cancel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrintEventKind::Start => "START",
            PrintEventKind::Progress => "PROGRESS",
            PrintEventKind::Complete => "COMPLETE",
            PrintEventKind::Error => "ERROR",
            PrintEventKind::Cancel => "CANCEL",
        }
    }

    /// Whether this event ends the machine's active print job
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PrintEventKind::Complete | PrintEventKind::Error | PrintEventKind::Cancel
        )
    }
}

impl fmt::Display for PrintEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrintEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "START" => Ok(PrintEventKind::Start),
            "PROGRESS" => Ok(PrintEventKind::Progress),
            "COMPLETE" => Ok(PrintEventKind::Complete),
            "ERROR" => Ok(PrintEventKind::Error),
            "CANCEL" => Ok(PrintEventKind::Cancel),
            _ => Err(format!(
                "invalid event type '{s}', expected one of START, PROGRESS, COMPLETE, ERROR, CANCEL"
            )),
        }
    }
}

/// Garment color class tracked per order item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GarmentType {
    Dark,
    Light,
}

impl GarmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentType::Dark => "DARK",
            GarmentType::Light => "LIGHT",
        }
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A GPS reading attached to a heartbeat
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationReading {
    pub lat: f64,
    pub lng: f64,
    pub provider: Option<String>,
}

/// Device heartbeat payload
///
/// Only `is_online` is required. Every other field is merged
/// field-by-field into the stored machine record: an absent field leaves
/// the existing value untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeartbeatPayload {
    pub device_id: String,
    pub is_online: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_printing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Uptime in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions_held: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationReading>,
}

/// Structured print event details
///
/// COMPLETE events that carry `student_id`, `garment_type` and
/// `garment_count` drive the order-item reconciler; the other fields are
/// stored for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrintEventBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garment_type: Option<GarmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garment_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Print event submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrintEventRequest {
    pub print_job_id: String,
    #[serde(rename = "type")]
    pub kind: PrintEventKind,
    pub payload: PrintEventBody,
    /// Deduplication token. When omitted, the service synthesizes a
    /// deterministic key from `{device_id, print_job_id, type}` — supply
    /// an explicit key whenever a job can legitimately emit the same
    /// event type more than once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

/// Deterministic idempotency key for events submitted without one.
///
/// Deliberately excludes any time component so that a retried request
/// produces the same key and deduplicates.
pub fn synthesize_idempotency_key(
    device_id: &str,
    print_job_id: &str,
    kind: PrintEventKind,
) -> String {
    format!("{device_id}:{print_job_id}:{kind}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_parse() {
        assert_eq!("START".parse::<PrintEventKind>(), Ok(PrintEventKind::Start));
        assert_eq!("CANCEL".parse::<PrintEventKind>(), Ok(PrintEventKind::Cancel));
        let err = "BOGUS".parse::<PrintEventKind>().unwrap_err();
        assert!(err.contains("START"));
        assert!(err.contains("CANCEL"));
    }

    #[test]
    fn test_event_kind_terminal() {
        assert!(!PrintEventKind::Start.is_terminal());
        assert!(!PrintEventKind::Progress.is_terminal());
        assert!(PrintEventKind::Complete.is_terminal());
        assert!(PrintEventKind::Error.is_terminal());
        assert!(PrintEventKind::Cancel.is_terminal());
    }

    #[test]
    fn test_heartbeat_sparse_payload() {
        // Only is_online — every optional field stays None
        let json = r#"{"device_id":"printer-01","is_online":true}"#;
        let hb: HeartbeatPayload = serde_json::from_str(json).unwrap();
        assert!(hb.is_online);
        assert!(hb.firmware_version.is_none());
        assert!(hb.location.is_none());
    }

    #[test]
    fn test_heartbeat_rejects_unknown_fields() {
        let json = r#"{"device_id":"printer-01","is_online":true,"surprise":1}"#;
        assert!(serde_json::from_str::<HeartbeatPayload>(json).is_err());
    }

    #[test]
    fn test_print_event_request_parse() {
        let json = r#"{
            "print_job_id": "job-7",
            "type": "COMPLETE",
            "payload": {"student_id": "stu-1", "garment_type": "DARK", "garment_count": 10},
            "idempotency_key": "evt-abc"
        }"#;
        let req: PrintEventRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind, PrintEventKind::Complete);
        assert_eq!(req.payload.garment_type, Some(GarmentType::Dark));
        assert_eq!(req.payload.garment_count, Some(10));
        assert_eq!(req.idempotency_key.as_deref(), Some("evt-abc"));
    }

    #[test]
    fn test_print_event_rejects_unknown_type() {
        let json = r#"{"print_job_id":"job-7","type":"EXPLODE","payload":{}}"#;
        assert!(serde_json::from_str::<PrintEventRequest>(json).is_err());
    }

    #[test]
    fn test_synthesized_key_is_deterministic() {
        let a = synthesize_idempotency_key("dev-1", "job-7", PrintEventKind::Complete);
        let b = synthesize_idempotency_key("dev-1", "job-7", PrintEventKind::Complete);
        assert_eq!(a, b);
        assert_eq!(a, "dev-1:job-7:COMPLETE");

        // Distinct jobs and kinds get distinct keys
        assert_ne!(
            synthesize_idempotency_key("dev-1", "job-8", PrintEventKind::Complete),
            a
        );
        assert_ne!(
            synthesize_idempotency_key("dev-1", "job-7", PrintEventKind::Start),
            a
        );
    }
}

//! Shared types for the Seragam platform service layer
//!
//! Common types used by the cloud service and the device firmware tooling:
//!
//! - [`error`]: unified error codes and API error responses
//! - [`signature`]: HMAC request signatures for device-facing endpoints
//! - [`device`]: wire payloads submitted by printing devices
//! - [`session`]: print-session and order-item status enums

pub mod device;
pub mod error;
pub mod session;
pub mod signature;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};

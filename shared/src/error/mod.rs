//! Unified error system for the Seragam platform
//!
//! This module provides:
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: error type with code and message
//! - [`AppResult`]: result alias for handler signatures
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Device errors
//! - 4xxx: Session / class errors
//! - 5xxx: Student errors
//! - 6xxx: Referral / notification errors
//! - 7xxx: Staff errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Error with the default message for the code
//! let err = AppError::new(ErrorCode::DeviceNotRegistered);
//!
//! // Error with a custom message
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Missing device_id");
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//! ```

mod category;
mod codes;
mod http_status;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};

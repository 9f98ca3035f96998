//! Unified error codes for the Seragam platform
//!
//! Error codes are shared between the cloud service, the web app, and the
//! device firmware so every surface can map a failure to the same meaning.
//! Codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Device errors
//! - 4xxx: Session / class errors
//! - 5xxx: Student errors
//! - 6xxx: Referral / notification errors
//! - 7xxx: Staff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 for efficient serialization and cross-language
/// compatibility (Rust, TypeScript).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1002,
    /// Token is invalid
    TokenInvalid = 1003,
    /// Request signature did not match
    SignatureInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,

    // ==================== 3xxx: Device ====================
    /// Device not registered
    DeviceNotRegistered = 3001,
    /// Unknown print event type
    EventTypeInvalid = 3002,
    /// Print event payload failed validation
    EventPayloadInvalid = 3003,
    /// Unknown garment type
    GarmentTypeInvalid = 3004,

    // ==================== 4xxx: Session / Class ====================
    /// Print session not found
    SessionNotFound = 4001,
    /// Unknown session status value
    SessionStatusInvalid = 4002,
    /// Operator not found
    OperatorNotFound = 4003,
    /// Class not found
    ClassNotFound = 4004,
    /// School not found
    SchoolNotFound = 4005,

    // ==================== 5xxx: Student ====================
    /// Student not found
    StudentNotFound = 5001,

    // ==================== 6xxx: Referral / Notification ====================
    /// Referral code not found
    ReferralCodeNotFound = 6001,
    /// Agent not found
    AgentNotFound = 6002,
    /// Unknown email template type
    EmailTypeInvalid = 6003,
    /// Email delivery failed
    EmailSendFailed = 6004,

    // ==================== 7xxx: Staff ====================
    /// Staff account creation failed
    StaffCreateFailed = 7001,
    /// Staff email already registered
    StaffEmailExists = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Configuration error
    ConfigError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "Caller is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SignatureInvalid => "Invalid signature",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Device
            ErrorCode::DeviceNotRegistered => "Device not registered",
            ErrorCode::EventTypeInvalid => "Unknown print event type",
            ErrorCode::EventPayloadInvalid => "Print event payload failed validation",
            ErrorCode::GarmentTypeInvalid => "Unknown garment type",

            // Session / Class
            ErrorCode::SessionNotFound => "Session not found",
            ErrorCode::SessionStatusInvalid => "Unknown session status value",
            ErrorCode::OperatorNotFound => "Operator not found",
            ErrorCode::ClassNotFound => "Class not found",
            ErrorCode::SchoolNotFound => "School not found",

            // Student
            ErrorCode::StudentNotFound => "Student not found",

            // Referral / Notification
            ErrorCode::ReferralCodeNotFound => "Referral code not found",
            ErrorCode::AgentNotFound => "Agent not found",
            ErrorCode::EmailTypeInvalid => "Unknown email template type",
            ErrorCode::EmailSendFailed => "Email delivery failed",

            // Staff
            ErrorCode::StaffCreateFailed => "Staff account creation failed",
            ErrorCode::StaffEmailExists => "Staff email already registered",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::TokenExpired),
            1003 => Ok(ErrorCode::TokenInvalid),
            1004 => Ok(ErrorCode::SignatureInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::AdminRequired),

            // Device
            3001 => Ok(ErrorCode::DeviceNotRegistered),
            3002 => Ok(ErrorCode::EventTypeInvalid),
            3003 => Ok(ErrorCode::EventPayloadInvalid),
            3004 => Ok(ErrorCode::GarmentTypeInvalid),

            // Session / Class
            4001 => Ok(ErrorCode::SessionNotFound),
            4002 => Ok(ErrorCode::SessionStatusInvalid),
            4003 => Ok(ErrorCode::OperatorNotFound),
            4004 => Ok(ErrorCode::ClassNotFound),
            4005 => Ok(ErrorCode::SchoolNotFound),

            // Student
            5001 => Ok(ErrorCode::StudentNotFound),

            // Referral / Notification
            6001 => Ok(ErrorCode::ReferralCodeNotFound),
            6002 => Ok(ErrorCode::AgentNotFound),
            6003 => Ok(ErrorCode::EmailTypeInvalid),
            6004 => Ok(ErrorCode::EmailSendFailed),

            // Staff
            7001 => Ok(ErrorCode::StaffCreateFailed),
            7002 => Ok(ErrorCode::StaffEmailExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::SignatureInvalid.code(), 1004);
        assert_eq!(ErrorCode::AdminRequired.code(), 2002);
        assert_eq!(ErrorCode::DeviceNotRegistered.code(), 3001);
        assert_eq!(ErrorCode::SessionNotFound.code(), 4001);
        assert_eq!(ErrorCode::StudentNotFound.code(), 5001);
        assert_eq!(ErrorCode::ReferralCodeNotFound.code(), 6001);
        assert_eq!(ErrorCode::StaffCreateFailed.code(), 7001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::DeviceNotRegistered.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1004), Ok(ErrorCode::SignatureInvalid));
        assert_eq!(ErrorCode::try_from(3001), Ok(ErrorCode::DeviceNotRegistered));
        assert_eq!(ErrorCode::try_from(4002), Ok(ErrorCode::SessionStatusInvalid));
        assert_eq!(ErrorCode::try_from(9002), Ok(ErrorCode::DatabaseError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(8001), Err(InvalidErrorCode(8001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize_as_u16() {
        assert_eq!(serde_json::to_string(&ErrorCode::NotFound).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&ErrorCode::DeviceNotRegistered).unwrap(),
            "3001"
        );
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::SignatureInvalid,
            ErrorCode::SessionStatusInvalid,
            ErrorCode::EmailSendFailed,
            ErrorCode::InternalError,
        ];
        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::DeviceNotRegistered.message(), "Device not registered");
        assert_eq!(ErrorCode::SessionNotFound.message(), "Session not found");
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }
}

//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Device errors
/// - 4xxx: Session / class errors
/// - 5xxx: Student errors
/// - 6xxx: Referral / notification errors
/// - 7xxx: Staff errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Device errors (3xxx)
    Device,
    /// Session / class errors (4xxx)
    Session,
    /// Student errors (5xxx)
    Student,
    /// Referral / notification errors (6xxx)
    Referral,
    /// Staff errors (7xxx)
    Staff,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Device,
            4000..5000 => Self::Session,
            5000..6000 => Self::Student,
            6000..7000 => Self::Referral,
            7000..8000 => Self::Staff,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Device => "device",
            Self::Session => "session",
            Self::Student => "student",
            Self::Referral => "referral",
            Self::Staff => "staff",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Device);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Session);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Student);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Referral);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Staff);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::SignatureInvalid.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::AdminRequired.category(), ErrorCategory::Permission);
        assert_eq!(ErrorCode::DeviceNotRegistered.category(), ErrorCategory::Device);
        assert_eq!(ErrorCode::SessionNotFound.category(), ErrorCategory::Session);
        assert_eq!(ErrorCode::StudentNotFound.category(), ErrorCategory::Student);
        assert_eq!(ErrorCode::EmailSendFailed.category(), ErrorCategory::Referral);
        assert_eq!(ErrorCode::StaffCreateFailed.category(), ErrorCategory::Staff);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Device).unwrap(),
            "\"device\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCategory::System).unwrap(),
            "\"system\""
        );
    }
}

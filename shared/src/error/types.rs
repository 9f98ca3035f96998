//! Error type and API response integration

use super::codes::ErrorCode;
use http::StatusCode;
use thiserror::Error;

/// Application error with a structured error code
///
/// The primary error type for the platform's service layer, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - HTTP status + JSON response mapping for axum handlers
///
/// On the wire, errors serialize to the shape every client of the platform
/// already consumes: a JSON object whose top-level `error` field carries
/// the message, plus the numeric `code`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Create a not authenticated error
    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create an invalid token error
    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    /// Create an invalid signature error
    pub fn invalid_signature() -> Self {
        Self::new(ErrorCode::SignatureInvalid)
    }

    /// Create a permission denied error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        // Log system errors with their full message before responding
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        let status = self.http_status();
        let body = Json(serde_json::json!({
            "error": self.message,
            "code": self.code,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::DeviceNotRegistered);
        assert_eq!(err.code, ErrorCode::DeviceNotRegistered);
        assert_eq!(err.message, "Device not registered");
    }

    #[test]
    fn test_app_error_with_message() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "Missing device_id");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Missing device_id");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::new(ErrorCode::SessionNotFound).http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::unauthorized().http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::forbidden("Admin only").http_status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::not_found("Student");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Student not found");

        let err = AppError::validation("Invalid input");
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = AppError::invalid_signature();
        assert_eq!(err.code, ErrorCode::SignatureInvalid);

        let err = AppError::database("Connection failed");
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::NotFound, "Order not found");
        assert_eq!(format!("{}", err), "Order not found");
    }
}

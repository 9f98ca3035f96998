//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error
    ///
    /// The mapping follows the platform's error taxonomy: client input
    /// faults map to 400, missing resources to 404, authentication to
    /// 401, authorization to 403, and dependency faults to 500.
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,

            // Client input (400)
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::RequiredField
            | ErrorCode::EventTypeInvalid
            | ErrorCode::EventPayloadInvalid
            | ErrorCode::GarmentTypeInvalid
            | ErrorCode::SessionStatusInvalid
            | ErrorCode::EmailTypeInvalid => StatusCode::BAD_REQUEST,

            // Admin surface contract: a downstream account-create
            // failure is reported as a client error.
            ErrorCode::StaffCreateFailed => StatusCode::BAD_REQUEST,

            // Not found (404)
            ErrorCode::NotFound
            | ErrorCode::DeviceNotRegistered
            | ErrorCode::SessionNotFound
            | ErrorCode::OperatorNotFound
            | ErrorCode::ClassNotFound
            | ErrorCode::SchoolNotFound
            | ErrorCode::StudentNotFound
            | ErrorCode::ReferralCodeNotFound
            | ErrorCode::AgentNotFound => StatusCode::NOT_FOUND,

            // Conflict (409)
            ErrorCode::AlreadyExists | ErrorCode::StaffEmailExists => StatusCode::CONFLICT,

            // Authentication (401)
            ErrorCode::NotAuthenticated
            | ErrorCode::TokenExpired
            | ErrorCode::TokenInvalid
            | ErrorCode::SignatureInvalid => StatusCode::UNAUTHORIZED,

            // Authorization (403)
            ErrorCode::PermissionDenied | ErrorCode::AdminRequired => StatusCode::FORBIDDEN,

            // System / dependency (500)
            ErrorCode::Unknown
            | ErrorCode::EmailSendFailed
            | ErrorCode::InternalError
            | ErrorCode::DatabaseError
            | ErrorCode::NetworkError
            | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::DeviceNotRegistered.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::SignatureInvalid.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::AdminRequired.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::DatabaseError.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Downstream account-create failures surface as 400, not 500
        assert_eq!(ErrorCode::StaffCreateFailed.http_status(), StatusCode::BAD_REQUEST);
    }
}

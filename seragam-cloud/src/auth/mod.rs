//! Admin bearer-token verification
//!
//! The admin dashboard authenticates against the managed auth provider
//! and forwards its HS256 access token. This layer only verifies the
//! signature and the role claim; account/session management stays with
//! the provider.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};

/// Claims carried by an admin access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// User id (subject)
    pub sub: String,
    /// Role name, "admin" required for the admin surface
    pub role: String,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

/// Verify the `Authorization: Bearer <token>` header and require the
/// admin role.
///
/// Missing or malformed credentials are a 401; a valid token without the
/// admin role is a 403.
pub fn require_admin(headers: &HeaderMap, secret: &str) -> Result<AdminClaims, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(AppError::unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::invalid_token("Expected Bearer token"))?;

    let data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| AppError::invalid_token(format!("Token verification failed: {e}")))?;

    if !data.claims.role.eq_ignore_ascii_case("admin") {
        return Err(AppError::with_message(
            ErrorCode::AdminRequired,
            "Admin role required",
        ));
    }

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret";

    fn make_token(role: &str, secret: &str) -> String {
        let claims = AdminClaims {
            sub: "user-1".into(),
            role: role.into(),
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, format!("Bearer {token}").parse().unwrap());
        headers
    }

    #[test]
    fn test_accepts_admin_token() {
        let headers = headers_with(&make_token("admin", SECRET));
        let claims = require_admin(&headers, SECRET).unwrap();
        assert_eq!(claims.sub, "user-1");
    }

    #[test]
    fn test_missing_header_is_unauthenticated() {
        let err = require_admin(&HeaderMap::new(), SECRET).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn test_non_bearer_header_is_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic abc123".parse().unwrap());
        let err = require_admin(&headers, SECRET).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let headers = headers_with(&make_token("admin", "other-secret"));
        let err = require_admin(&headers, SECRET).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }

    #[test]
    fn test_non_admin_role_is_forbidden() {
        let headers = headers_with(&make_token("operator", SECRET));
        let err = require_admin(&headers, SECRET).unwrap_err();
        assert_eq!(err.code, ErrorCode::AdminRequired);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let claims = AdminClaims {
            sub: "user-1".into(),
            role: "admin".into(),
            exp: chrono::Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        let err = require_admin(&headers_with(&token), SECRET).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }
}

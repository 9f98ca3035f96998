//! Service configuration
//!
//! Loaded from environment variables exactly once at startup and injected
//! into [`crate::state::AppState`]; handlers never read the environment.

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Secret for admin bearer tokens (HS256)
    pub jwt_secret: String,
    /// Transactional email provider API key
    pub resend_api_key: String,
    /// Transactional email provider base URL
    pub resend_base_url: String,
    /// Sender address for agent notification emails
    pub email_from: String,
}

impl Config {
    /// Require a secret env var: must be set and non-empty outside the
    /// development environment.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            resend_api_key: Self::require_secret("RESEND_API_KEY", &environment)?,
            resend_base_url: std::env::var("RESEND_BASE_URL")
                .unwrap_or_else(|_| "https://api.resend.com".into()),
            email_from: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "noreply@seragam.app".into()),
            environment,
        })
    }
}

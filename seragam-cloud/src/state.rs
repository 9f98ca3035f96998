//! Application state

use sqlx::PgPool;

use crate::config::Config;
use crate::email::EmailClient;
use crate::notify::{self, NotificationSender};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Transactional email client (direct sends)
    pub email: EmailClient,
    /// Queue handle for background notification delivery
    pub notifications: NotificationSender,
    /// Secret for admin bearer tokens
    pub jwt_secret: String,
}

impl AppState {
    /// Create the application state: connect, migrate, start the
    /// notification worker.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        let email = EmailClient::new(config);
        let notifications = notify::spawn_worker(email.clone());

        Ok(Self {
            pool,
            email,
            notifications,
            jwt_secret: config.jwt_secret.clone(),
        })
    }
}

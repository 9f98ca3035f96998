//! seragam-cloud — school-uniform printing platform, service layer
//!
//! Long-running service that:
//! - Ingests device heartbeats and print-job lifecycle events (HMAC-signed)
//! - Reconciles order-item progress from the immutable event log
//! - Serves the operator/admin session, class and student endpoints
//! - Dispatches referral-commission notification emails to agents

mod api;
mod auth;
mod config;
mod db;
mod email;
mod error;
mod notify;
mod reconcile;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seragam_cloud=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting seragam-cloud (env: {})", config.environment);

    // Initialize application state (pool, migrations, notification worker)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("seragam-cloud HTTP listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}

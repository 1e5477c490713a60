//! QR generation service binary.
//!
//! Initializes tracing, opens the database, and serves the HTTP API
//! until interrupted.

mod app;
mod config;
mod server;

use tracing_subscriber::EnvFilter;

use crate::app::SharedState;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting QR generation service");

    let config = ServerConfig::load();
    let db = access_db::Database::open(&config.database_path)?;
    tracing::info!(path = %config.database_path, "Database ready");

    let state = SharedState::new(db, config);
    server::start_server(state).await
}

//! Main entry point for the account service.
//!
//! This file initializes logging, loads configuration, connects the backing
//! store, and serves the HTTP API.

use std::sync::Arc;

use account_service::api;
use account_service::config::Config;
use account_service::state::AppState;
use account_service::storage::SqliteAccountStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = SqliteAccountStore::connect(&config).await?;
    let app = api::router(AppState::new(Arc::new(store)));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Starting account service on port {}", config.server_port);
    axum::serve(listener, app).await?;

    Ok(())
}

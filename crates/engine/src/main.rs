//! Roster Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_engine::infrastructure::config::{load_dotenv_from_repo_root, AppConfig};
use roster_engine::infrastructure::sqlite::SqlitePlayerRepo;
use roster_engine::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster Engine");

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        database_url = %config.database_url,
        max_connections = config.database_max_connections,
        "Connecting to player database"
    );
    let repo =
        SqlitePlayerRepo::connect(&config.database_url, config.database_max_connections).await?;

    let app = Arc::new(App::new(Arc::new(repo)));

    let router = api::router(app, config.cors_layer());

    // Start server
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

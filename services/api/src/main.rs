use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::serve;
use campus_api::create_app;
use campus_storage::MemStore;
use campus_utils::{init_logging, AppConfig};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting campus website API");

    // Seed the in-memory store; volatile by design, repopulated on
    // every restart.
    let store = Arc::new(RwLock::new(MemStore::with_fixtures()));

    let app = create_app(store, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(&addr).await?;
    info!("API listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use psa_collection::server::{self, AppState};
use psa_collection::{AppConfig, MemoryStore, PsaClient, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so RUST_LOG and PSA_AUTH_TOKEN can live there
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let client = PsaClient::from_config(&config)?;
    if client.is_configured() {
        info!(api = client.base_url(), "PSA API configured");
    } else {
        warn!("PSA API not configured; set PSA_AUTH_TOKEN to enable cert lookups");
    }

    let state = Arc::new(AppState::new(
        client,
        Arc::new(MemoryStore::new()),
        config.static_dir.clone(),
    ));
    let app = server::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

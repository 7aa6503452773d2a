use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use load_server::config::AppConfig;
use load_server::service::LoadService;
use load_server::turvo::{ReferenceData, TurvoClient};
use load_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // The token is fetched once and never refreshed
    info!(base_url = %config.turvo.base_url, "connecting to Turvo");
    let client = TurvoClient::connect(&config.turvo).await?;

    let loads = LoadService::new(client, ReferenceData::default());
    let app = create_router(AppState::new(loads));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "load server listening");
    info!("  GET  /health           - Health check");
    info!("  POST /v2/create-load   - Create one load or a batch");
    info!("  GET  /v2/view-loads    - List loads (start, pageSize)");

    axum::serve(listener, app).await?;
    Ok(())
}

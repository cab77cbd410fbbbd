//! Footprint admin edge service binary.

use footprint_api::{create_app, ApiConfig, AppState};
use footprint_common::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load()?;
    init_tracing(&config.telemetry())?;

    let address = config.server_address();
    info!(
        environment = %config.app_env,
        maintenance = config.maintenance_mode,
        origin = %config.allowed_origin(),
        "Starting footprint-api"
    );

    let app = create_app(AppState::new(config)?)?;

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}

//! Run the edge service with an in-memory blob store.
//!
//! Uploads are kept in memory and served from a fake public URL, so the
//! upload flow can be tried without a storage token.
//!
//! Run with:
//! ```bash
//! cargo run --example simple_server
//! ```

use footprint_api::{create_app, ApiConfig, AppState};
use footprint_infrastructure::MemoryBlobStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().unwrap_or_default();

    println!("Starting Footprint edge service...");
    println!("  Server: {}", config.server_address());
    println!("  Environment: {}", config.app_env);
    println!("  Allowed origin: {}", config.allowed_origin());
    println!("  Maintenance mode: {}", config.maintenance_mode);

    let address = config.server_address();
    let state = AppState::with_blob_store(
        config,
        Arc::new(MemoryBlobStore::new("https://blob.local")),
    );
    let app = create_app(state)?;

    let listener = tokio::net::TcpListener::bind(&address).await?;

    println!("\nServer ready!");
    println!("  Health: http://{}/health", address);
    println!("  Upload: POST http://{}/api/upload", address);
    println!("\nPress Ctrl+C to stop");

    axum::serve(listener, app).await?;

    Ok(())
}

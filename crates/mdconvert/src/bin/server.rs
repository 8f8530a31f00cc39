//! Conversion server binary
//!
//! Run with: cargo run -p mdconvert --bin mdconvert-server [config.toml]

use mdconvert::{config::AppConfig, server::Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdconvert=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (optional TOML path as first argument)
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    tracing::info!("Configuration loaded");
    tracing::info!("  - Converter binary: {}", config.converter.binary);
    tracing::info!("  - Delivery mode: {:?}", config.converter.mode);
    tracing::info!("  - Plugins enabled: {}", config.converter.enable_plugins);
    tracing::info!("  - Max upload size: {} bytes", config.server.max_upload_size);

    // Warn early when the remote document-intelligence endpoint is down;
    // conversion requests that rely on it would fail later anyway
    if let Some(endpoint) = &config.converter.docintel_endpoint {
        tracing::info!("Checking document-intelligence endpoint {}...", endpoint);
        let client = reqwest::Client::new();
        match client.get(endpoint).send().await {
            Ok(resp) if resp.status().is_success() || resp.status().is_client_error() => {
                tracing::info!("Document-intelligence endpoint is reachable");
            }
            _ => {
                tracing::warn!("Document-intelligence endpoint not reachable: {}", endpoint);
            }
        }
    }

    // Create and start server
    let server = Server::new(config);

    println!("\nServer starting...");
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /convert/ - Convert an uploaded file to Markdown");
    println!("  GET  /health   - Health check");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}

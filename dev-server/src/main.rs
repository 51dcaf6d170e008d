//! Development server for UI development
//!
//! This binary runs the API with a handful of sample items so the UI has
//! something to show. PORT (default 8000) can be set in the environment or
//! a .env file.
//!
//! Usage: cargo run -p dev-server

use anyhow::{Context, Result};
use test_helpers::mock::DevDataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    let subscriber = api::telemetry::get_subscriber("info");
    api::telemetry::init_subscriber(subscriber)?;

    let port = match std::env::var("PORT") {
        Ok(port) => port.parse().context("PORT must be a port number")?,
        Err(_) => 8000,
    };

    info!("🚀 Starting development server");
    let app = test_helpers::spawn_app_on_port(port).await;
    info!("✅ API server running on {}", app.address);

    info!("📊 Adding sample items...");
    let dataset = DevDataset::create(&app).await?;

    info!("🎯 Development server ready!");
    info!("   API: {}", app.address);
    info!("   UI:  cd ui && BACKEND_URL={} trunk serve", app.address);
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}

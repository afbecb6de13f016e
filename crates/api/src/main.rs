//! AutoVault - Main Entry Point

use anyhow::Context;
use api::{run_server, telemetry, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);
    let config = AppConfig::load(config_path.as_deref()).context("loading configuration")?;

    telemetry::init_logging(&config.server.log_level)
        .map_err(|e| anyhow::anyhow!("initializing logging: {}", e))?;

    info!("=== AutoVault price estimator v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Model artifact: {}", config.model.artifact_path.display());

    run_server(config).await
}

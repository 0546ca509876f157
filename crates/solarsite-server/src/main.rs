//! SolarSite terrain service entry point.
//!
//! Loads `solarsite-config.yaml` (or the file named by `SOLARSITE_CONFIG`),
//! initializes logging, and serves the terrain API and frontend.

use std::sync::Arc;

use anyhow::Context;
use solarsite_server::{AppConfig, AppState, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the elevation
/// client cannot be built, or the server fails to bind or serve.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;

    let level = config.logging.level.clone();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(true)
        .init();

    info!(
        host = config.server.host,
        port = config.server.port,
        elevation_url = config.elevation.base_url,
        timeout_ms = config.elevation.timeout_ms,
        frontend_dir = %config.assets.frontend_dir.display(),
        "configuration loaded"
    );

    let state = Arc::new(AppState::from_config(&config).context("building elevation client")?);
    start_server(&config.server, state).await?;
    Ok(())
}

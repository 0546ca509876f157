//! Shared application state for the SolarSite server.

use solarsite_terrain::JitterMode;

use crate::config::{AppConfig, AssetsConfig};
use crate::elevation::{ElevationError, ElevationResolver};

/// State shared by all request handlers.
///
/// Immutable after startup; handlers only read it.
pub struct AppState {
    /// Elevation lookups with fallback.
    pub resolver: ElevationResolver,
    /// Jitter mode for synthesized profiles.
    pub jitter: JitterMode,
    /// Static file and dataset locations.
    pub assets: AssetsConfig,
}

impl AppState {
    /// Create state from its parts.
    pub const fn new(resolver: ElevationResolver, jitter: JitterMode, assets: AssetsConfig) -> Self {
        Self {
            resolver,
            jitter,
            assets,
        }
    }

    /// Build state from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ElevationError`] if the elevation client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ElevationError> {
        Ok(Self::new(
            ElevationResolver::from_config(&config.elevation)?,
            config.terrain.jitter,
            config.assets.clone(),
        ))
    }
}

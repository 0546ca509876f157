//! Elevation lookup with a bounded wait and a deterministic fallback.
//!
//! Live lookups go through an [`ElevationProvider`]. The
//! [`ElevationResolver`] caps every lookup at the configured timeout and
//! substitutes [`fallback_elevation`] on any failure, so resolution itself
//! never fails.

use std::time::Duration;

use solarsite_terrain::{Location, fallback_elevation};
use tracing::{debug, warn};

use crate::config::{ElevationConfig, ElevationProviderKind};

/// Reasons a live elevation lookup produced no usable value.
#[derive(Debug, thiserror::Error)]
pub enum ElevationError {
    /// The request could not be sent or the body could not be read.
    #[error("elevation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("elevation service returned {0}")]
    Status(reqwest::StatusCode),

    /// The body did not carry a numeric elevation.
    #[error("elevation response missing numeric elevation")]
    MissingElevation,

    /// The lookup did not finish within the configured bound.
    #[error("elevation lookup timed out after {0:?}")]
    Timeout(Duration),

    /// No live provider is configured.
    #[error("no live elevation provider configured")]
    Offline,
}

// ---------------------------------------------------------------------------
// Provider enum (dyn-compatible alternative to async trait)
// ---------------------------------------------------------------------------

/// A source of base elevations.
pub enum ElevationProvider {
    /// HTTP service with the OpenTopoData response shape.
    OpenTopoData(OpenTopoDataProvider),
    /// Constant elevation in meters.
    Fixed(f64),
    /// Always unavailable; every lookup falls back.
    Offline,
}

impl ElevationProvider {
    /// Look up the elevation at `location` in meters.
    ///
    /// # Errors
    ///
    /// Returns [`ElevationError`] if the provider cannot supply a value.
    pub async fn fetch(&self, location: Location) -> Result<f64, ElevationError> {
        match self {
            Self::OpenTopoData(provider) => provider.fetch(location).await,
            Self::Fixed(elevation) => Ok(*elevation),
            Self::Offline => Err(ElevationError::Offline),
        }
    }

    /// Human-readable name for logging and the health endpoint.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenTopoData(_) => "open_topo_data",
            Self::Fixed(_) => "fixed",
            Self::Offline => "offline",
        }
    }
}

/// Client for `GET {base_url}?locations={lat},{lon}`.
pub struct OpenTopoDataProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpenTopoDataProvider {
    /// Create a provider using `client` against `base_url`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, location: Location) -> Result<f64, ElevationError> {
        let locations = format!("{},{}", location.latitude, location.longitude);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("locations", locations.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ElevationError::Status(status));
        }

        let json: serde_json::Value = response.json().await?;
        extract_elevation(&json).ok_or(ElevationError::MissingElevation)
    }
}

/// Read a finite elevation from an elevation service payload.
///
/// Accepts the OpenTopoData shape `{"results":[{"elevation":n}]}` and a
/// bare `{"elevation":n}` object.
pub fn extract_elevation(json: &serde_json::Value) -> Option<f64> {
    json.get("results")
        .and_then(|r| r.get(0))
        .and_then(|r| r.get("elevation"))
        .or_else(|| json.get("elevation"))
        .and_then(serde_json::Value::as_f64)
        .filter(|e| e.is_finite())
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolves base elevations, never failing and never waiting past `timeout`.
pub struct ElevationResolver {
    provider: ElevationProvider,
    timeout: Duration,
}

impl ElevationResolver {
    /// Create a resolver around `provider`.
    pub const fn new(provider: ElevationProvider, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Build the resolver described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ElevationError::Request`] if the HTTP client cannot be built.
    pub fn from_config(config: &ElevationConfig) -> Result<Self, ElevationError> {
        let provider = match config.provider {
            ElevationProviderKind::OpenTopoData => {
                let client = reqwest::Client::builder()
                    .timeout(config.timeout())
                    .build()?;
                ElevationProvider::OpenTopoData(OpenTopoDataProvider::new(
                    client,
                    config.base_url.clone(),
                ))
            }
            ElevationProviderKind::Fixed => ElevationProvider::Fixed(config.fixed_elevation_m),
            ElevationProviderKind::Offline => ElevationProvider::Offline,
        };
        Ok(Self::new(provider, config.timeout()))
    }

    /// The underlying provider.
    pub const fn provider(&self) -> &ElevationProvider {
        &self.provider
    }

    /// Elevation at `location`, or the synthetic fallback if the live
    /// lookup fails or exceeds the timeout.
    pub async fn resolve(&self, location: Location) -> f64 {
        match self.try_resolve(location).await {
            Ok(elevation) => {
                debug!(
                    provider = self.provider.name(),
                    lat = location.latitude,
                    lon = location.longitude,
                    elevation,
                    "elevation resolved"
                );
                elevation
            }
            Err(ElevationError::Offline) => fallback_elevation(location),
            Err(e) => {
                let fallback = fallback_elevation(location);
                warn!(
                    provider = self.provider.name(),
                    lat = location.latitude,
                    lon = location.longitude,
                    fallback,
                    error = %e,
                    "elevation lookup failed, using fallback"
                );
                fallback
            }
        }
    }

    async fn try_resolve(&self, location: Location) -> Result<f64, ElevationError> {
        tokio::time::timeout(self.timeout, self.provider.fetch(location))
            .await
            .map_err(|_elapsed| ElevationError::Timeout(self.timeout))?
    }
}

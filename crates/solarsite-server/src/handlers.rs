//! REST API endpoint handlers for the SolarSite server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`/`POST` | `/api/terrain-analysis` | Terrain metrics for a coordinate |
//! | `GET`/`POST` | `/api/terrain-analysis/assessment` | Metrics plus suitability and advice |
//! | `GET` | `/api/solar/solar-data` | Static solar irradiance dataset |
//! | `GET` | `/health` | Liveness and configured elevation provider |
//!
//! Coordinates come from the query string, a JSON body, or both; body
//! fields win when both are present.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::Uri;
use serde::Deserialize;
use solarsite_terrain::{Location, SiteAssessment, TerrainMetrics, analyze, assess};
use tracing::debug;
use validator::Validate;

use crate::error::ApiError;
use crate::solar::load_solar_dataset;
use crate::state::AppState;

/// Message returned when a coordinate is absent.
pub const MISSING_COORDINATES: &str = "Latitude and longitude are required";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Coordinates as supplied by a client.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CoordinatesInput {
    /// Latitude in degrees.
    #[serde(alias = "lat")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(alias = "lon", alias = "lng")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

impl CoordinatesInput {
    /// Fill absent fields from `other`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self {
            latitude: self.latitude.or(other.latitude),
            longitude: self.longitude.or(other.longitude),
        }
    }

    /// Check presence, finiteness, and range, then build a [`Location`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingInput`] if either coordinate is absent and
    /// [`ApiError::InvalidInput`] if one is non-finite or out of range.
    pub fn into_location(self) -> Result<Location, ApiError> {
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(ApiError::MissingInput(MISSING_COORDINATES.to_owned()));
        };
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ApiError::InvalidInput(
                "Latitude and longitude must be finite numbers".to_owned(),
            ));
        }
        self.validate()
            .map_err(|e| ApiError::InvalidInput(format!("Coordinates out of range: {e}")))?;
        Ok(Location::new(latitude, longitude))
    }
}

/// Extract coordinates from the query string and an optional JSON body.
fn read_coordinates(uri: &Uri, body: &Bytes) -> Result<Location, ApiError> {
    let Query(from_query) = Query::<CoordinatesInput>::try_from_uri(uri)
        .map_err(|e| ApiError::InvalidInput(format!("Invalid query: {e}")))?;

    let from_body = if body.iter().all(u8::is_ascii_whitespace) {
        CoordinatesInput::default()
    } else {
        serde_json::from_slice::<CoordinatesInput>(body)
            .map_err(|e| ApiError::InvalidInput(format!("Invalid JSON body: {e}")))?
    };

    from_body.or(from_query).into_location()
}

// ---------------------------------------------------------------------------
// Terrain
// ---------------------------------------------------------------------------

/// `GET`/`POST /api/terrain-analysis`: terrain metrics for a coordinate.
///
/// # Errors
///
/// Returns 400 for missing or invalid coordinates and 500 if the pipeline
/// produces a non-finite value.
pub async fn terrain_analysis(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    body: Bytes,
) -> Result<Json<TerrainMetrics>, ApiError> {
    let location = read_coordinates(&uri, &body)?;
    let elevation = state.resolver.resolve(location).await;
    let metrics = analyze(location, elevation, state.jitter)?;
    debug!(
        lat = location.latitude,
        lon = location.longitude,
        elevation,
        avg_slope = metrics.avg_slope,
        soil = %metrics.soil_type,
        "terrain analyzed"
    );
    Ok(Json(metrics))
}

/// `GET`/`POST /api/terrain-analysis/assessment`: full site assessment.
///
/// # Errors
///
/// Same conditions as [`terrain_analysis`].
pub async fn site_assessment(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    body: Bytes,
) -> Result<Json<SiteAssessment>, ApiError> {
    let location = read_coordinates(&uri, &body)?;
    let elevation = state.resolver.resolve(location).await;
    let assessment = assess(location, elevation, state.jitter)?;
    debug!(
        lat = location.latitude,
        lon = location.longitude,
        score = assessment.suitability_score,
        "site assessed"
    );
    Ok(Json(assessment))
}

// ---------------------------------------------------------------------------
// Solar dataset, health, not found
// ---------------------------------------------------------------------------

/// `GET /api/solar/solar-data`: the configured dataset wrapped as
/// `{"success": true, "data": ...}`.
///
/// # Errors
///
/// Returns 404 if the file is absent and 500 if it cannot be read or parsed.
pub async fn solar_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let data = load_solar_dataset(&state.assets.solar_dataset).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "data": data,
    })))
}

/// `GET /health`: liveness probe.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "elevationProvider": state.resolver.provider().name(),
    }))
}

/// JSON 404 for paths no route or static file matches.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("File not found".to_owned())
}

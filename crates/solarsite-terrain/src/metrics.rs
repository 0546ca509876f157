//! Aggregate terrain analysis pipeline.
//!
//! [`analyze`] runs every generator for one `(location, elevation)` pair:
//!
//! ```text
//! base elevation --> profile --> slopes --> slope stats --> flood risk
//!                        \--> roughness
//! location --> soil, flow direction, water-table depth
//! ```
//!
//! Each call is pure, so concurrent requests need no coordination.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::drainage::{flood_risk, flow_direction, water_table_depth};
use crate::enums::{FlowDirection, FoundationStrength, RiskLevel, Roughness, SoilType};
use crate::error::TerrainError;
use crate::location::Location;
use crate::profile::{JitterMode, synthesize_profile};
use crate::roughness::classify_roughness;
use crate::slope::{SlopeStats, compute_slopes};
use crate::soil::{SoilProfile, generate_soil};
use crate::suitability::{SuitabilityBand, recommendations, suitability_score};

/// Terrain metrics for one location, as returned by the terrain endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TerrainMetrics {
    /// Base elevation in meters.
    pub elevation: f64,
    /// Synthetic elevation profile (20 samples, meters).
    pub elevation_values: Vec<f64>,
    /// Mean slope along the profile, degrees.
    pub avg_slope: f64,
    /// Steepest slope along the profile, degrees.
    pub max_slope: f64,
    /// Roughness class of the profile.
    pub roughness: Roughness,
    /// Soil texture class.
    pub soil_type: SoilType,
    /// Foundation support of the soil.
    pub foundation_strength: FoundationStrength,
    /// Erosion risk of the soil.
    pub erosion_risk: RiskLevel,
    /// Synthetic surface flow direction.
    pub flow_direction: FlowDirection,
    /// Flood risk class.
    pub flood_risk: RiskLevel,
    /// Depth to the water table in meters (at least 1).
    pub water_table_depth: f64,
}

/// Full site assessment: metrics plus soil detail, score, and advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SiteAssessment {
    /// The analyzed location.
    pub location: Location,
    /// Terrain metrics for the location.
    pub metrics: TerrainMetrics,
    /// Soil profile including composition.
    pub soil: SoilProfile,
    /// Suitability score in `[0, 100]`.
    pub suitability_score: u8,
    /// Qualitative band for the score.
    pub suitability: SuitabilityBand,
    /// Ordered installation recommendations.
    pub recommendations: Vec<String>,
}

/// Compute all terrain metrics for `location` at base `elevation`.
///
/// # Errors
///
/// Returns [`TerrainError::NonFiniteOutput`] when an input is so extreme
/// that a derived value overflows to NaN or infinity.
pub fn analyze(
    location: Location,
    elevation: f64,
    jitter: JitterMode,
) -> Result<TerrainMetrics, TerrainError> {
    analyze_with_soil(location, elevation, jitter).map(|(metrics, _)| metrics)
}

/// Compute metrics, suitability, and recommendations for `location`.
///
/// # Errors
///
/// Same conditions as [`analyze`].
pub fn assess(
    location: Location,
    elevation: f64,
    jitter: JitterMode,
) -> Result<SiteAssessment, TerrainError> {
    let (metrics, soil) = analyze_with_soil(location, elevation, jitter)?;
    let score = suitability_score(&metrics);
    let recommendations = recommendations(&metrics);
    Ok(SiteAssessment {
        location,
        suitability_score: score,
        suitability: SuitabilityBand::from_score(score),
        recommendations,
        soil,
        metrics,
    })
}

fn analyze_with_soil(
    location: Location,
    elevation: f64,
    jitter: JitterMode,
) -> Result<(TerrainMetrics, SoilProfile), TerrainError> {
    ensure_finite("elevation", elevation)?;

    let profile = synthesize_profile(elevation, location, jitter);
    if !profile.is_finite() {
        return Err(TerrainError::NonFiniteOutput {
            field: "elevationValues",
        });
    }

    let slopes = compute_slopes(profile.samples());
    let stats = SlopeStats::from_slopes(&slopes);
    ensure_finite("avgSlope", stats.avg)?;
    ensure_finite("maxSlope", stats.max)?;

    let depth = water_table_depth(elevation, location);
    ensure_finite("waterTableDepth", depth)?;

    let soil = generate_soil(location);
    let metrics = TerrainMetrics {
        elevation,
        elevation_values: profile.to_vec(),
        avg_slope: stats.avg,
        max_slope: stats.max,
        roughness: classify_roughness(profile.samples()),
        soil_type: soil.soil_type,
        foundation_strength: soil.foundation_strength,
        erosion_risk: soil.erosion_risk,
        flow_direction: flow_direction(location, elevation),
        flood_risk: flood_risk(elevation, stats.avg),
        water_table_depth: depth,
    };
    Ok((metrics, soil))
}

const fn ensure_finite(field: &'static str, value: f64) -> Result<(), TerrainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TerrainError::NonFiniteOutput { field })
    }
}

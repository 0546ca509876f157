//! Synthetic terrain metrics for the SolarSite site-selection tool.
//!
//! Given a [`Location`] and a base elevation, this crate deterministically
//! produces a 20-sample elevation profile and everything derived from it:
//! slope statistics, a roughness class, a flow-direction label, flood risk,
//! water-table depth, and soil characteristics. On top of those it scores
//! the site for solar suitability and emits installation recommendations.
//!
//! Nothing here performs I/O. The server crate obtains a base elevation
//! (live or via [`fallback_elevation`]) and hands it to [`analyze`] or
//! [`assess`].
//!
//! # Modules
//!
//! - [`location`] -- coordinates and the location-derived seed
//! - [`enums`] -- classification vocabularies (roughness, risk, soil, compass)
//! - [`profile`] -- elevation profile synthesis with seeded jitter
//! - [`slope`] -- adjacent-sample slopes and their statistics
//! - [`roughness`] -- roughness classification
//! - [`soil`] -- soil profile generation
//! - [`drainage`] -- flow direction, flood risk, water-table depth
//! - [`fallback`] -- deterministic elevation used when no live data exists
//! - [`suitability`] -- solar suitability score and recommendations
//! - [`metrics`] -- the aggregate [`TerrainMetrics`] pipeline

pub mod drainage;
pub mod enums;
pub mod error;
pub mod fallback;
pub mod location;
pub mod metrics;
pub mod profile;
pub mod roughness;
pub mod slope;
pub mod soil;
pub mod suitability;

pub use drainage::{flood_risk, flow_direction, water_table_depth};
pub use enums::{FlowDirection, FoundationStrength, RiskLevel, Roughness, SoilType};
pub use error::TerrainError;
pub use fallback::fallback_elevation;
pub use location::Location;
pub use metrics::{SiteAssessment, TerrainMetrics, analyze, assess};
pub use profile::{ElevationProfile, JitterMode, PROFILE_POINTS, synthesize_profile};
pub use roughness::classify_roughness;
pub use slope::{SlopeStats, compute_slopes};
pub use soil::{SoilComposition, SoilProfile, generate_soil};
pub use suitability::{SuitabilityBand, recommendations, suitability_score};

//! HTTP service for SolarSite terrain analysis.
//!
//! Exposes the terrain generators from [`solarsite_terrain`] over Axum:
//!
//! - **Terrain analysis** (`/api/terrain-analysis`) returning the
//!   eleven-field metrics record for a coordinate
//! - **Site assessment** (`/api/terrain-analysis/assessment`) adding the
//!   soil composition, suitability score, and recommendations
//! - **Solar dataset** (`/api/solar/solar-data`) read from disk
//! - **Static frontend** files and shared assets
//!
//! Base elevations come from an [`ElevationResolver`], which bounds each
//! live lookup and falls back to a deterministic synthetic elevation, so
//! upstream outages never reach API callers.
//!
//! [`ElevationResolver`]: elevation::ElevationResolver

pub mod config;
pub mod elevation;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod solar;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use elevation::{ElevationError, ElevationProvider, ElevationResolver, OpenTopoDataProvider};
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;

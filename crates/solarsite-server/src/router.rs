//! Axum router construction for the SolarSite API.

use std::sync::Arc;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the SolarSite server.
///
/// The router includes:
/// - `GET|POST /api/terrain-analysis` -- terrain metrics
/// - `GET|POST /api/terrain-analysis/assessment` -- suitability assessment
/// - `GET /api/solar/solar-data` -- solar irradiance dataset
/// - `GET /health` -- liveness probe
/// - `/assets/*` -- `frontend/assets`, then the shared asset directory
/// - everything else -- files under the frontend directory (`/` serves
///   `index.html`), JSON 404 when absent
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(state.assets.frontend_assets_dir()).fallback(
        ServeDir::new(&state.assets.assets_dir)
            .not_found_service(handlers::not_found.into_service()),
    );
    let frontend = ServeDir::new(&state.assets.frontend_dir)
        .not_found_service(handlers::not_found.into_service());

    Router::new()
        .route(
            "/api/terrain-analysis",
            get(handlers::terrain_analysis).post(handlers::terrain_analysis),
        )
        .route(
            "/api/terrain-analysis/assessment",
            get(handlers::site_assessment).post(handlers::site_assessment),
        )
        .route("/api/solar/solar-data", get(handlers::solar_data))
        .route("/health", get(handlers::health))
        .nest_service("/assets", assets)
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

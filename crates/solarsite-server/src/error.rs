//! Error types for the SolarSite HTTP layer.
//!
//! [`ApiError`] converts every handler failure into a JSON body of the
//! form `{"error": message, "status": code}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use solarsite_terrain::TerrainError;

use crate::solar::SolarDataError;

/// Errors surfaced to API callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required coordinate was absent.
    #[error("{0}")]
    MissingInput(String),

    /// A coordinate or request body could not be accepted.
    #[error("{0}")]
    InvalidInput(String),

    /// The terrain pipeline produced an unusable value.
    #[error("terrain analysis failed: {0}")]
    Terrain(#[from] TerrainError),

    /// The solar dataset could not be served.
    #[error(transparent)]
    SolarData(#[from] SolarDataError),

    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingInput(_) | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::SolarData(SolarDataError::NotFound) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Terrain(_) | Self::SolarData(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(
            ApiError::MissingInput("x".to_owned()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::SolarData(SolarDataError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Terrain(TerrainError::NonFiniteOutput { field: "elevation" }).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

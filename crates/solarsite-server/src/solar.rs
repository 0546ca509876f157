//! Solar irradiance dataset loader.
//!
//! The dataset is an opaque JSON document read from disk on every
//! request, so edits to the file are picked up without a restart.

use std::io::ErrorKind;
use std::path::Path;

/// Errors reading the solar dataset.
#[derive(Debug, thiserror::Error)]
pub enum SolarDataError {
    /// The dataset file does not exist.
    #[error("solar dataset not found")]
    NotFound,

    /// The file exists but is not valid JSON.
    #[error("solar dataset is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Any other read failure.
    #[error("failed to read solar dataset: {0}")]
    Io(std::io::Error),
}

/// Read and parse the dataset at `path`.
///
/// # Errors
///
/// Returns [`SolarDataError::NotFound`] when the file is absent,
/// [`SolarDataError::Malformed`] when it is not JSON, and
/// [`SolarDataError::Io`] for other read failures.
pub async fn load_solar_dataset(path: &Path) -> Result<serde_json::Value, SolarDataError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => SolarDataError::NotFound,
        _ => SolarDataError::Io(e),
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

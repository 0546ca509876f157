//! Error types for the `solarsite-terrain` crate.

/// Errors that can occur while generating terrain metrics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TerrainError {
    /// A derived value came out as NaN or infinite.
    ///
    /// Happens when the base elevation or coordinates are so large that the
    /// arithmetic overflows. The generator never clamps these silently.
    #[error("non-finite {field} produced by terrain generator")]
    NonFiniteOutput {
        /// Name of the offending output field.
        field: &'static str,
    },
}

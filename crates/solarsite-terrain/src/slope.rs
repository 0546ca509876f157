//! Slope angles between adjacent profile samples.
//!
//! Samples are assumed to be [`HORIZONTAL_SPACING_M`] apart, so each slope
//! is `atan(|dz| / 100)` in degrees and always lies in `[0, 90)`.

use serde::{Deserialize, Serialize};

/// Assumed horizontal distance between consecutive samples, in meters.
pub const HORIZONTAL_SPACING_M: f64 = 100.0;

/// Slope reported when a profile has fewer than two samples.
pub const DEFAULT_SLOPE_DEG: f64 = 5.0;

/// Ratio of maximum to average slope assumed when no slopes are available.
const EMPTY_MAX_RATIO: f64 = 1.8;

/// Compute the slope in degrees for every adjacent pair of samples.
///
/// Returns `N - 1` values for `N >= 2` samples, or `[DEFAULT_SLOPE_DEG]`
/// when there is not enough data.
pub fn compute_slopes(profile: &[f64]) -> Vec<f64> {
    if profile.len() < 2 {
        return vec![DEFAULT_SLOPE_DEG];
    }
    profile
        .windows(2)
        .map(|pair| match pair {
            [a, b] => ((b - a).abs() / HORIZONTAL_SPACING_M).atan().to_degrees(),
            _ => DEFAULT_SLOPE_DEG,
        })
        .collect()
}

/// Summary statistics over a slope sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeStats {
    /// Arithmetic mean slope in degrees.
    pub avg: f64,
    /// Steepest slope in degrees.
    pub max: f64,
}

impl SlopeStats {
    /// Summarize `slopes`.
    ///
    /// An empty input falls back to an average of [`DEFAULT_SLOPE_DEG`] and
    /// a maximum of `1.8 * avg`.
    pub fn from_slopes(slopes: &[f64]) -> Self {
        let Some(avg) = mean(slopes) else {
            return Self {
                avg: DEFAULT_SLOPE_DEG,
                max: DEFAULT_SLOPE_DEG * EMPTY_MAX_RATIO,
            };
        };
        let max = slopes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { avg, max }
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let (sum, count) = values
        .iter()
        .fold((0.0_f64, 0.0_f64), |(sum, count), v| (sum + v, count + 1.0));
    Some(sum / count)
}

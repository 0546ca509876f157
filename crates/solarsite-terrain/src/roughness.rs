//! Surface roughness classification.
//!
//! Roughness is the population standard deviation of the absolute
//! elevation changes between consecutive samples.

use crate::enums::Roughness;
use crate::slope::mean;

/// Standard deviations below this are [`Roughness::Low`].
const LOW_THRESHOLD: f64 = 1.5;

/// Standard deviations below this (and not low) are [`Roughness::Medium`].
const MEDIUM_THRESHOLD: f64 = 4.0;

/// Classify the roughness of a profile.
///
/// Profiles with fewer than three samples yield [`Roughness::Medium`].
pub fn classify_roughness(profile: &[f64]) -> Roughness {
    match delta_std_dev(profile) {
        None => Roughness::Medium,
        Some(sd) if sd < LOW_THRESHOLD => Roughness::Low,
        Some(sd) if sd < MEDIUM_THRESHOLD => Roughness::Medium,
        Some(_) => Roughness::High,
    }
}

/// Population standard deviation of `|z[i] - z[i-1]|`.
///
/// `None` when the profile has fewer than three samples.
pub fn delta_std_dev(profile: &[f64]) -> Option<f64> {
    if profile.len() < 3 {
        return None;
    }
    let deltas: Vec<f64> = profile
        .windows(2)
        .filter_map(|pair| match pair {
            [a, b] => Some((b - a).abs()),
            _ => None,
        })
        .collect();
    let avg = mean(&deltas)?;
    let squared: Vec<f64> = deltas.iter().map(|d| (d - avg).powi(2)).collect();
    mean(&squared).map(f64::sqrt)
}

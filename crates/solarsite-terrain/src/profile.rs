//! Synthetic elevation profile generation.
//!
//! A profile is a fixed traverse of [`PROFILE_POINTS`] samples centred on
//! the requested location. Each sample is the base elevation plus a sum of
//! sinusoids at three scales, with the finest scale fading towards the
//! ends of the traverse:
//!
//! | Term    | Amplitude | Frequency | Phase      | Envelope               |
//! |---------|-----------|-----------|------------|------------------------|
//! | large   | 5         | 4p        | s / 10     | 1                      |
//! | medium  | 2         | 8p        | s / 5      | 1                      |
//! | small   | 1         | 20p       | s          | 1 - distance from mid  |
//! | jitter  | <= 0.25   | --        | --         | 1                      |
//!
//! where `p` is the normalized position in `[0, 1]` and `s` the location
//! seed. The summed variation is scaled by `max(1, 0.3 * log10(base))` so
//! higher terrain gets proportionally rougher profiles.
//!
//! # Determinism
//!
//! Jitter comes from a [`StdRng`] seeded with the coordinate bits, so the
//! same location always receives the same noise sequence.
//! [`JitterMode::Disabled`] drops the term entirely.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Number of samples in every elevation profile.
pub const PROFILE_POINTS: usize = 20;

/// Largest absolute jitter added to a sample before scaling.
pub const JITTER_BOUND: f64 = 0.25;

/// Index of the last sample, as the divisor for normalized positions.
const LAST_INDEX: f64 = 19.0;

/// How the per-sample jitter term is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JitterMode {
    /// Bounded noise from a PRNG keyed by the location coordinates.
    #[default]
    Seeded,
    /// No jitter; the profile is the pure sum of sinusoids.
    Disabled,
}

/// A fixed-length elevation traverse in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationProfile {
    samples: [f64; PROFILE_POINTS],
}

impl ElevationProfile {
    /// The samples in traverse order.
    pub const fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Copy the samples into a `Vec` for serialization.
    pub fn to_vec(&self) -> Vec<f64> {
        self.samples.to_vec()
    }

    /// Whether every sample is a finite number.
    pub fn is_finite(&self) -> bool {
        self.samples.iter().all(|v| v.is_finite())
    }
}

/// Variation scale factor for a base elevation.
///
/// `max(1, 0.3 * log10(base))`. Non-positive or non-finite bases return 1
/// instead of feeding an undefined logarithm.
pub fn scale_factor(base_elevation: f64) -> f64 {
    if !base_elevation.is_finite() || base_elevation <= 0.0 {
        return 1.0;
    }
    (base_elevation.log10() * 0.3).max(1.0)
}

/// Synthesize the elevation profile around `location`.
///
/// See the module documentation for the formula. Output length is always
/// [`PROFILE_POINTS`]; samples are not clamped.
pub fn synthesize_profile(
    base_elevation: f64,
    location: Location,
    jitter: JitterMode,
) -> ElevationProfile {
    let seed = location.seed();
    let scale = scale_factor(base_elevation);
    let mut rng = match jitter {
        JitterMode::Seeded => Some(StdRng::seed_from_u64(location.rng_seed())),
        JitterMode::Disabled => None,
    };

    let samples = std::array::from_fn(|index| {
        let noise = rng
            .as_mut()
            .map_or(0.0, |r| r.random_range(-JITTER_BOUND..=JITTER_BOUND));
        let variation = smooth_variation(normalized_position(index), seed) + noise;
        variation.mul_add(scale, base_elevation)
    });

    ElevationProfile { samples }
}

/// Jitter-free variation at normalized position `p` for seed `s`.
fn smooth_variation(p: f64, s: f64) -> f64 {
    let distance_from_center = (p - 0.5).abs() * 2.0;
    let large = p.mul_add(4.0, s / 10.0).sin() * 5.0;
    let medium = p.mul_add(8.0, s / 5.0).sin() * 2.0;
    let small = p.mul_add(20.0, s).sin() * (1.0 - distance_from_center);
    large + medium + small
}

/// Position of sample `index` along the traverse, in `[0, 1]`.
#[allow(clippy::cast_precision_loss)] // index < PROFILE_POINTS, exact in f64
fn normalized_position(index: usize) -> f64 {
    index as f64 / LAST_INDEX
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const PHILADELPHIA: Location = Location::new(40.0, -75.0);

    #[test]
    fn profile_has_fixed_length() {
        for base in [1.0, 150.0, 3_000.0, -20.0, 0.0] {
            let profile = synthesize_profile(base, PHILADELPHIA, JitterMode::Seeded);
            assert_eq!(profile.samples().len(), PROFILE_POINTS);
        }
    }

    #[test]
    fn identical_inputs_reproduce_exactly() {
        let a = synthesize_profile(357.0, PHILADELPHIA, JitterMode::Seeded);
        let b = synthesize_profile(357.0, PHILADELPHIA, JitterMode::Seeded);
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_stays_within_scaled_bound() {
        for (base, loc) in [
            (150.0, PHILADELPHIA),
            (4_500.0, Location::new(-33.9, 18.4)),
            (12.0, Location::new(0.0, 0.0)),
        ] {
            let noisy = synthesize_profile(base, loc, JitterMode::Seeded);
            let smooth = synthesize_profile(base, loc, JitterMode::Disabled);
            let bound = JITTER_BOUND * scale_factor(base) + 1e-9;
            for (n, s) in noisy.samples().iter().zip(smooth.samples()) {
                assert!((n - s).abs() <= bound, "{n} vs {s} exceeds {bound}");
            }
        }
    }

    #[test]
    fn seeded_jitter_actually_perturbs() {
        let noisy = synthesize_profile(150.0, PHILADELPHIA, JitterMode::Seeded);
        let smooth = synthesize_profile(150.0, PHILADELPHIA, JitterMode::Disabled);
        assert_ne!(noisy, smooth);
    }

    #[test]
    fn scale_factor_guards_log_domain() {
        assert_eq!(scale_factor(0.0), 1.0);
        assert_eq!(scale_factor(-5.0), 1.0);
        assert_eq!(scale_factor(f64::NAN), 1.0);
        // 0.3 * log10(100) = 0.6 -> floor of 1
        assert_eq!(scale_factor(100.0), 1.0);
        // 0.3 * log10(1e5) = 1.5
        assert!((scale_factor(100_000.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn first_smooth_sample_matches_formula() {
        let profile = synthesize_profile(150.0, PHILADELPHIA, JitterMode::Disabled);
        let s = 25.0_f64;
        // p = 0, distance from center = 1, small term vanishes.
        let expected = 150.0 + (s / 10.0).sin() * 5.0 + (s / 5.0).sin() * 2.0;
        let first = profile.samples().first().copied().unwrap_or_default();
        assert!((first - expected).abs() < 1e-9);
    }

    #[test]
    fn negative_seed_location_uses_wrapped_phase() {
        // -339 + 18.4 = -320.6 -> seed 79.4
        let location = Location::new(-33.9, 18.4);
        let s = location.seed();
        assert!((s - 79.4).abs() < 1e-9);
        let profile = synthesize_profile(150.0, location, JitterMode::Disabled);
        let expected = 150.0 + (s / 10.0).sin() * 5.0 + (s / 5.0).sin() * 2.0;
        let first = profile.samples().first().copied().unwrap_or_default();
        assert!((first - expected).abs() < 1e-9);
    }

    #[test]
    fn non_positive_base_still_produces_finite_profile() {
        let profile = synthesize_profile(-10.0, PHILADELPHIA, JitterMode::Seeded);
        assert!(profile.is_finite());
    }
}

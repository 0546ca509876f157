//! Geographic coordinates fed into the generator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A point on the globe in decimal degrees.
///
/// The generator accepts any value numerically. Out-of-range coordinates
/// simply produce meaningless numbers; the HTTP layer rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Location {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Location {
    /// Create a location from latitude and longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Location-derived seed `(lat * 10 + lon) mod 100`.
    ///
    /// Floored remainder, so the seed is non-negative for every sign
    /// of `lat * 10 + lon`.
    pub fn seed(self) -> f64 {
        self.latitude.mul_add(10.0, self.longitude).rem_euclid(100.0)
    }

    /// 64-bit seed for the jitter PRNG, built from the raw coordinate bits.
    pub(crate) const fn rng_seed(self) -> u64 {
        self.latitude.to_bits().rotate_left(32) ^ self.longitude.to_bits()
    }
}

//! Deterministic elevation used when no live elevation data is available.

use crate::location::Location;

/// Synthetic base elevation for `location`, in meters.
///
/// `200 + (|lat| mod 10) * 10 + (|lon| mod 10) * 5 + 50 sin(lat * lon)`.
/// Always within `[150, 400)` for finite coordinates.
pub fn fallback_elevation(location: Location) -> f64 {
    let lat_term = (location.latitude.abs() % 10.0) * 10.0;
    let lon_term = (location.longitude.abs() % 10.0) * 5.0;
    let wave = (location.latitude * location.longitude).sin() * 50.0;
    200.0 + lat_term + lon_term + wave
}

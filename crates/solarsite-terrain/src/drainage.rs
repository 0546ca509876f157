//! Drainage classifiers: flow direction, flood risk, and water-table depth.
//!
//! # Flood risk
//!
//! Flood risk is an ordered rule table evaluated top to bottom; the first
//! matching rule wins. The ranges overlap, so order is significant.
//!
//! | # | Condition                          | Risk   |
//! |---|------------------------------------|--------|
//! | 1 | elevation < 10 and slope < 2       | High   |
//! | 2 | elevation < 50 and slope < 5       | Medium |
//! | 3 | elevation < 100 and slope < 3      | Medium |
//! | 4 | elevation > 200 or slope > 10      | Low    |
//! | - | otherwise                          | Medium |

use crate::enums::{FlowDirection, RiskLevel};
use crate::location::Location;

/// Shallowest water table the generator will report, in meters.
pub const MIN_WATER_TABLE_DEPTH_M: f64 = 1.0;

/// Risk returned when no flood rule matches.
const FLOOD_DEFAULT: RiskLevel = RiskLevel::Medium;

/// A single flood-risk rule: predicate over `(elevation, slope)`.
struct FloodRule {
    applies: fn(f64, f64) -> bool,
    risk: RiskLevel,
}

/// Flood rules in evaluation order.
const FLOOD_RULES: [FloodRule; 4] = [
    FloodRule {
        applies: |elevation, slope| elevation < 10.0 && slope < 2.0,
        risk: RiskLevel::High,
    },
    FloodRule {
        applies: |elevation, slope| elevation < 50.0 && slope < 5.0,
        risk: RiskLevel::Medium,
    },
    FloodRule {
        applies: |elevation, slope| elevation < 100.0 && slope < 3.0,
        risk: RiskLevel::Medium,
    },
    FloodRule {
        applies: |elevation, slope| elevation > 200.0 || slope > 10.0,
        risk: RiskLevel::Low,
    },
];

/// Classify flood risk from elevation (m) and average slope (degrees).
pub fn flood_risk(elevation: f64, avg_slope: f64) -> RiskLevel {
    FLOOD_RULES
        .iter()
        .find(|rule| (rule.applies)(elevation, avg_slope))
        .map_or(FLOOD_DEFAULT, |rule| rule.risk)
}

/// Synthetic flow direction for a location at `elevation`.
///
/// Indexes [`FlowDirection::ALL`] by `floor((lat * lon * elevation) mod 8)`
/// with a floored remainder. Non-finite products, and the rounding edge
/// where the remainder reaches 8, fall back to North.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // floor of [0, 8]
pub fn flow_direction(location: Location, elevation: f64) -> FlowDirection {
    let product = location.latitude * location.longitude * elevation;
    let index = product.rem_euclid(8.0).floor() as usize;
    FlowDirection::ALL
        .get(index)
        .copied()
        .unwrap_or(FlowDirection::North)
}

/// Synthetic depth to the water table in meters, never below
/// [`MIN_WATER_TABLE_DEPTH_M`].
///
/// `max(1, 3 + elevation / 50 + 2 sin(lat) + 2 cos(lon))`.
pub fn water_table_depth(elevation: f64, location: Location) -> f64 {
    let base_depth = 3.0 + elevation / 50.0;
    let variation = location
        .latitude
        .sin()
        .mul_add(2.0, location.longitude.cos() * 2.0);
    (base_depth + variation).max(MIN_WATER_TABLE_DEPTH_M)
}

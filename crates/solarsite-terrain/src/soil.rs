//! Synthetic soil characteristics keyed by location.
//!
//! The soil type is picked from [`SoilType::ALL`] by
//! `floor((|lat| + |lon|) mod 6)`. Foundation strength follows from the
//! type; erosion risk combines the type with an erosion factor
//! `f = 5 sin(s) + 5` in `[0, 10]`:
//!
//! | Soil types          | High when | Low when |
//! |---------------------|-----------|----------|
//! | Silt, Loamy Sand    | f > 7     | never    |
//! | Rocky, Clay         | never     | f < 3    |
//! | everything else     | f > 8     | f < 4    |
//!
//! Composition percentages are four independent trigonometric functions of
//! the seed. They do not sum to 100 and are reported unnormalized.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{FoundationStrength, RiskLevel, SoilType};
use crate::location::Location;

/// Approximate soil texture fractions in percent (not normalized).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoilComposition {
    /// Sand percentage, `30 + 20 sin(s)`.
    pub sand: f64,
    /// Silt percentage, `30 + 15 cos(s)`.
    pub silt: f64,
    /// Clay percentage, `20 + 10 sin(2s)`.
    pub clay: f64,
    /// Organic matter percentage, `5 + 5 cos(2s)`.
    pub organic: f64,
}

/// Soil characteristics for a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SoilProfile {
    /// Soil texture class.
    pub soil_type: SoilType,
    /// Foundation support derived from the soil type.
    pub foundation_strength: FoundationStrength,
    /// Erosion risk derived from soil type and erosion factor.
    pub erosion_risk: RiskLevel,
    /// Texture fractions.
    pub composition: SoilComposition,
}

/// Generate the soil profile for `location`.
pub fn generate_soil(location: Location) -> SoilProfile {
    let seed = location.seed();
    let soil_type = soil_type_at(location);
    let erosion_factor = seed.sin().mul_add(5.0, 5.0);

    SoilProfile {
        soil_type,
        foundation_strength: soil_type.foundation_strength(),
        erosion_risk: erosion_risk(soil_type, erosion_factor),
        composition: SoilComposition {
            sand: seed.sin().mul_add(20.0, 30.0),
            silt: seed.cos().mul_add(15.0, 30.0),
            clay: (seed * 2.0).sin().mul_add(10.0, 20.0),
            organic: (seed * 2.0).cos().mul_add(5.0, 5.0),
        },
    }
}

/// Erosion risk for a soil type at a given erosion factor.
pub fn erosion_risk(soil_type: SoilType, factor: f64) -> RiskLevel {
    match soil_type {
        SoilType::Silt | SoilType::LoamySand => {
            if factor > 7.0 {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            }
        }
        SoilType::Rocky | SoilType::Clay => {
            if factor < 3.0 {
                RiskLevel::Low
            } else {
                RiskLevel::Medium
            }
        }
        SoilType::SandyLoam | SoilType::SiltyClay => {
            if factor > 8.0 {
                RiskLevel::High
            } else if factor < 4.0 {
                RiskLevel::Low
            } else {
                RiskLevel::Medium
            }
        }
    }
}

/// Soil type selected by `floor((|lat| + |lon|) mod 6)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // floor of [0, 6)
fn soil_type_at(location: Location) -> SoilType {
    let index = ((location.latitude.abs() + location.longitude.abs()) % 6.0).floor() as usize;
    SoilType::ALL
        .get(index)
        .copied()
        .unwrap_or(SoilType::SandyLoam)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_reproducible() {
        let a = generate_soil(Location::new(0.0, 0.0));
        let b = generate_soil(Location::new(0.0, 0.0));
        assert_eq!(a, b);
        // index 0, seed 0 -> f = 5
        assert_eq!(a.soil_type, SoilType::SandyLoam);
        assert_eq!(a.foundation_strength, FoundationStrength::Moderate);
        assert_eq!(a.erosion_risk, RiskLevel::Medium);
        assert_eq!(a.composition.sand, 30.0);
        assert_eq!(a.composition.silt, 45.0);
        assert_eq!(a.composition.clay, 20.0);
        assert_eq!(a.composition.organic, 10.0);
    }

    #[test]
    fn soil_type_follows_coordinate_sum() {
        assert_eq!(soil_type_at(Location::new(3.5, 0.0)), SoilType::Rocky);
        assert_eq!(soil_type_at(Location::new(-2.0, 2.5)), SoilType::LoamySand);
        // 40 + 75 = 115 -> 115 mod 6 = 1
        assert_eq!(soil_type_at(Location::new(40.0, -75.0)), SoilType::Clay);
    }

    #[test]
    fn southwest_quadrant_uses_wrapped_seed() {
        // -200 - 10 = -210 -> seed 90; 30 mod 6 = 0 -> Sandy Loam
        let soil = generate_soil(Location::new(-20.0, -10.0));
        assert_eq!(soil.soil_type, SoilType::SandyLoam);
        // f = 5 sin(90) + 5 ~ 9.47 > 8
        assert_eq!(soil.erosion_risk, RiskLevel::High);
        assert!((soil.composition.sand - 47.879_933).abs() < 1e-5);
    }

    #[test]
    fn composition_is_not_normalized() {
        let soil = generate_soil(Location::new(0.0, 0.0));
        let c = soil.composition;
        let total = c.sand + c.silt + c.clay + c.organic;
        assert!((total - 100.0).abs() > 1.0);
    }

    #[test]
    fn erosion_thresholds_per_type() {
        assert_eq!(erosion_risk(SoilType::Silt, 7.5), RiskLevel::High);
        assert_eq!(erosion_risk(SoilType::LoamySand, 1.0), RiskLevel::Medium);
        assert_eq!(erosion_risk(SoilType::Rocky, 2.0), RiskLevel::Low);
        assert_eq!(erosion_risk(SoilType::Clay, 9.0), RiskLevel::Medium);
        assert_eq!(erosion_risk(SoilType::SandyLoam, 8.5), RiskLevel::High);
        assert_eq!(erosion_risk(SoilType::SiltyClay, 3.9), RiskLevel::Low);
        assert_eq!(erosion_risk(SoilType::SiltyClay, 6.0), RiskLevel::Medium);
    }
}

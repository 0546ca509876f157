//! Classification vocabularies used by the terrain generator.
//!
//! Every enum serializes to the display string the frontend renders
//! (`"Sandy Loam"`, `"Northeast"`, ...). Ordered vocabularies expose an
//! `ALL` table so classifiers can index into them without mutable state.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Roughness
// ---------------------------------------------------------------------------

/// Coarse classification of elevation variability along a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Roughness {
    /// Standard deviation of deltas below 1.5 m.
    Low,
    /// Standard deviation of deltas below 4 m, or too few samples to tell.
    Medium,
    /// Standard deviation of deltas at or above 4 m.
    High,
}

impl Roughness {
    /// Display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

// ---------------------------------------------------------------------------
// Risk levels (flood, erosion)
// ---------------------------------------------------------------------------

/// Three-level risk rating shared by flood and erosion classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskLevel {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
}

impl RiskLevel {
    /// Display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

// ---------------------------------------------------------------------------
// Foundation strength
// ---------------------------------------------------------------------------

/// Load-bearing quality of the soil for mounting foundations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FoundationStrength {
    /// Weak support.
    Low,
    /// Adequate support.
    Moderate,
    /// Strong support.
    High,
}

impl FoundationStrength {
    /// Display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

// ---------------------------------------------------------------------------
// Soil type
// ---------------------------------------------------------------------------

/// Soil texture class assigned to a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SoilType {
    /// Sandy loam.
    #[serde(rename = "Sandy Loam")]
    SandyLoam,
    /// Clay.
    Clay,
    /// Silt.
    Silt,
    /// Rocky ground.
    Rocky,
    /// Loamy sand.
    #[serde(rename = "Loamy Sand")]
    LoamySand,
    /// Silty clay.
    #[serde(rename = "Silty Clay")]
    SiltyClay,
}

impl SoilType {
    /// The soil vocabulary in selection order.
    pub const ALL: [Self; 6] = [
        Self::SandyLoam,
        Self::Clay,
        Self::Silt,
        Self::Rocky,
        Self::LoamySand,
        Self::SiltyClay,
    ];

    /// Display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SandyLoam => "Sandy Loam",
            Self::Clay => "Clay",
            Self::Silt => "Silt",
            Self::Rocky => "Rocky",
            Self::LoamySand => "Loamy Sand",
            Self::SiltyClay => "Silty Clay",
        }
    }

    /// Fixed foundation-strength lookup for this soil type.
    pub const fn foundation_strength(self) -> FoundationStrength {
        match self {
            Self::Rocky | Self::Clay => FoundationStrength::High,
            Self::SandyLoam => FoundationStrength::Moderate,
            Self::Silt | Self::LoamySand | Self::SiltyClay => FoundationStrength::Low,
        }
    }
}

// ---------------------------------------------------------------------------
// Flow direction
// ---------------------------------------------------------------------------

/// Compass label for the synthetic surface-water flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FlowDirection {
    /// 0 degrees.
    North,
    /// 45 degrees.
    Northeast,
    /// 90 degrees.
    East,
    /// 135 degrees.
    Southeast,
    /// 180 degrees.
    South,
    /// 225 degrees.
    Southwest,
    /// 270 degrees.
    West,
    /// 315 degrees.
    Northwest,
}

impl FlowDirection {
    /// Compass points clockwise from North.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::Northeast,
        Self::East,
        Self::Southeast,
        Self::South,
        Self::Southwest,
        Self::West,
        Self::Northwest,
    ];

    /// Display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::Northeast => "Northeast",
            Self::East => "East",
            Self::Southeast => "Southeast",
            Self::South => "South",
            Self::Southwest => "Southwest",
            Self::West => "West",
            Self::Northwest => "Northwest",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(Roughness, RiskLevel, FoundationStrength, SoilType, FlowDirection);

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn soil_type_serializes_display_name() {
        let json = serde_json::to_string(&SoilType::SandyLoam).unwrap();
        assert_eq!(json, "\"Sandy Loam\"");
        let back: SoilType = serde_json::from_str("\"Silty Clay\"").unwrap();
        assert_eq!(back, SoilType::SiltyClay);
    }

    #[test]
    fn serde_names_agree_with_display() {
        for soil in SoilType::ALL {
            let json = serde_json::to_string(&soil).unwrap();
            assert_eq!(json, format!("\"{soil}\""));
        }
        for direction in FlowDirection::ALL {
            let json = serde_json::to_string(&direction).unwrap();
            assert_eq!(json, format!("\"{direction}\""));
        }
    }

    #[test]
    fn foundation_lookup() {
        assert_eq!(SoilType::Rocky.foundation_strength(), FoundationStrength::High);
        assert_eq!(SoilType::Clay.foundation_strength(), FoundationStrength::High);
        assert_eq!(
            SoilType::SandyLoam.foundation_strength(),
            FoundationStrength::Moderate
        );
        assert_eq!(SoilType::Silt.foundation_strength(), FoundationStrength::Low);
        assert_eq!(SoilType::LoamySand.foundation_strength(), FoundationStrength::Low);
        assert_eq!(SoilType::SiltyClay.foundation_strength(), FoundationStrength::Low);
    }

    #[test]
    fn compass_starts_north_and_runs_clockwise() {
        assert_eq!(FlowDirection::ALL[0], FlowDirection::North);
        assert_eq!(FlowDirection::ALL[2], FlowDirection::East);
        assert_eq!(FlowDirection::ALL[7], FlowDirection::Northwest);
    }
}

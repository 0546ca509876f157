//! Solar-installation suitability scoring and recommendations.
//!
//! The score starts at [`BASE_SCORE`] and is nudged by slope, erosion risk,
//! and flood risk, then clamped to `[0, 100]`:
//!
//! | Factor        | Penalty          | Bonus           |
//! |---------------|------------------|-----------------|
//! | average slope | > 15 deg: -20    | < 5 deg: +10    |
//! | erosion risk  | High: -15        | Low: +10        |
//! | flood risk    | High: -20        | Low: +10        |

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{RiskLevel, SoilType};
use crate::metrics::TerrainMetrics;

/// Score before any terrain adjustment.
pub const BASE_SCORE: i32 = 75;

/// Water tables shallower than this trigger a foundation warning.
const SHALLOW_WATER_TABLE_M: f64 = 5.0;

/// Qualitative band for a suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SuitabilityBand {
    /// Score above 70.
    Good,
    /// Score above 40.
    Fair,
    /// Score of 40 or below.
    Poor,
}

impl SuitabilityBand {
    /// Band for a score in `[0, 100]`.
    pub const fn from_score(score: u8) -> Self {
        if score > 70 {
            Self::Good
        } else if score > 40 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Suitability score in `[0, 100]` for the analyzed terrain.
pub fn suitability_score(metrics: &TerrainMetrics) -> u8 {
    let slope_adjustment = if metrics.avg_slope > 15.0 {
        -20
    } else if metrics.avg_slope < 5.0 {
        10
    } else {
        0
    };
    let erosion_adjustment = match metrics.erosion_risk {
        RiskLevel::High => -15,
        RiskLevel::Medium => 0,
        RiskLevel::Low => 10,
    };
    let flood_adjustment = match metrics.flood_risk {
        RiskLevel::High => -20,
        RiskLevel::Medium => 0,
        RiskLevel::Low => 10,
    };

    let score = BASE_SCORE
        .saturating_add(slope_adjustment)
        .saturating_add(erosion_adjustment)
        .saturating_add(flood_adjustment)
        .clamp(0, 100);
    u8::try_from(score).unwrap_or(0)
}

/// Ordered installation recommendations for the analyzed terrain.
///
/// Always contains the slope recommendation; soil, erosion, flood, and
/// water-table notes are appended when they apply.
pub fn recommendations(metrics: &TerrainMetrics) -> Vec<String> {
    let mut out = Vec::with_capacity(5);

    out.push(slope_recommendation(metrics.avg_slope).to_owned());

    match metrics.soil_type {
        SoilType::SandyLoam | SoilType::LoamySand => out.push(format!(
            "{} soil provides good drainage and moderate foundation support.",
            metrics.soil_type
        )),
        SoilType::Clay => out.push(
            "Clay soil may require special foundation considerations due to \
             expansion/contraction properties."
                .to_owned(),
        ),
        SoilType::Rocky => out.push(
            "Rocky soil provides excellent foundation stability but may increase \
             installation costs."
                .to_owned(),
        ),
        SoilType::Silt => out.push(
            "Silty soil may require additional foundation support and erosion \
             control measures."
                .to_owned(),
        ),
        SoilType::SiltyClay => {}
    }

    match metrics.erosion_risk {
        RiskLevel::High => out.push(
            "Implement comprehensive erosion control measures including retaining \
             walls and vegetation."
                .to_owned(),
        ),
        RiskLevel::Medium => out.push(
            "Standard erosion control measures recommended including proper drainage \
             channels."
                .to_owned(),
        ),
        RiskLevel::Low => {}
    }

    match metrics.flood_risk {
        RiskLevel::High => out.push(
            "Consider elevated mounting systems and flood protection measures due to \
             high flood risk."
                .to_owned(),
        ),
        RiskLevel::Medium => {
            out.push("Implement proper drainage systems to mitigate moderate flood risk.".to_owned());
        }
        RiskLevel::Low => {}
    }

    if metrics.water_table_depth < SHALLOW_WATER_TABLE_M {
        out.push(format!(
            "Shallow water table ({:.1}m) may require specialized foundation design.",
            metrics.water_table_depth
        ));
    }

    out
}

/// Slope guidance, from steepest to flattest.
fn slope_recommendation(avg_slope: f64) -> &'static str {
    if avg_slope > 15.0 {
        "Consider terracing or specialized mounting systems due to steep terrain \
         (slope > 15\u{b0})."
    } else if avg_slope > 10.0 {
        "Moderate slope requires careful foundation planning and erosion control measures."
    } else if avg_slope < 3.0 {
        "Very flat terrain is excellent for solar installations but may require \
         drainage improvements."
    } else {
        "Gentle slope provides good natural drainage and is suitable for most \
         renewable installations."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{FlowDirection, FoundationStrength, Roughness};

    fn sample_metrics() -> TerrainMetrics {
        TerrainMetrics {
            elevation: 150.0,
            elevation_values: vec![150.0; 20],
            avg_slope: 4.0,
            max_slope: 6.0,
            roughness: Roughness::Low,
            soil_type: SoilType::Clay,
            foundation_strength: FoundationStrength::High,
            erosion_risk: RiskLevel::Medium,
            flow_direction: FlowDirection::North,
            flood_risk: RiskLevel::Medium,
            water_table_depth: 8.0,
        }
    }

    #[test]
    fn gentle_medium_site_scores_eighty_five() {
        let metrics = sample_metrics();
        assert_eq!(suitability_score(&metrics), 85);
        assert_eq!(SuitabilityBand::from_score(85), SuitabilityBand::Good);
    }

    #[test]
    fn worst_case_is_twenty() {
        let metrics = TerrainMetrics {
            avg_slope: 22.0,
            erosion_risk: RiskLevel::High,
            flood_risk: RiskLevel::High,
            ..sample_metrics()
        };
        assert_eq!(suitability_score(&metrics), 20);
        assert_eq!(SuitabilityBand::from_score(20), SuitabilityBand::Poor);
    }

    #[test]
    fn best_case_is_clamped_to_hundred() {
        let metrics = TerrainMetrics {
            avg_slope: 1.0,
            erosion_risk: RiskLevel::Low,
            flood_risk: RiskLevel::Low,
            ..sample_metrics()
        };
        assert_eq!(suitability_score(&metrics), 100);
    }

    #[test]
    fn band_edges() {
        assert_eq!(SuitabilityBand::from_score(71), SuitabilityBand::Good);
        assert_eq!(SuitabilityBand::from_score(70), SuitabilityBand::Fair);
        assert_eq!(SuitabilityBand::from_score(41), SuitabilityBand::Fair);
        assert_eq!(SuitabilityBand::from_score(40), SuitabilityBand::Poor);
    }

    #[test]
    fn recommendations_follow_fixed_order() {
        let metrics = TerrainMetrics {
            water_table_depth: 3.4,
            ..sample_metrics()
        };
        let recs = recommendations(&metrics);
        assert_eq!(recs.len(), 5);
        assert!(recs.first().is_some_and(|r| r.starts_with("Gentle slope")));
        assert!(recs.get(1).is_some_and(|r| r.starts_with("Clay soil")));
        assert!(recs.get(2).is_some_and(|r| r.starts_with("Standard erosion")));
        assert!(recs.get(3).is_some_and(|r| r.contains("moderate flood risk")));
        assert!(recs.get(4).is_some_and(|r| r.contains("(3.4m)")));
    }

    #[test]
    fn low_risk_silty_clay_gets_only_slope_advice() {
        let metrics = TerrainMetrics {
            avg_slope: 2.0,
            soil_type: SoilType::SiltyClay,
            erosion_risk: RiskLevel::Low,
            flood_risk: RiskLevel::Low,
            ..sample_metrics()
        };
        let recs = recommendations(&metrics);
        assert_eq!(recs.len(), 1);
        assert!(recs.first().is_some_and(|r| r.starts_with("Very flat terrain")));
    }

    #[test]
    fn sandy_soils_name_themselves() {
        let metrics = TerrainMetrics {
            soil_type: SoilType::LoamySand,
            ..sample_metrics()
        };
        let recs = recommendations(&metrics);
        assert!(recs.iter().any(|r| r.starts_with("Loamy Sand soil provides good drainage")));
    }
}

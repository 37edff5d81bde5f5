//! Strategy Module - Strategic aggregation over SWOT-derived factors.
//!
//! # Components
//!
//! - `WeightedFactor` / `FactorSet` - IFE and EFE weighted sums
//! - `StrategicPosture` - four-way posture around the 3.0 midpoint
//! - `IeRegion` - nine-region Internal-External grid
//! - `BcgQuadrant` - per-category positioning against IoT readiness
//!
//! Both postures are exposed side by side; neither is derived from the other.

mod bcg;
mod factor;
mod posture;

pub use bcg::{bcg_positions, BcgPosition, BcgQuadrant, BCG_MIDPOINT};
pub use factor::{aggregate_total, FactorSet, WeightedFactor};
pub use posture::{IeAction, IeRegion, StrategicPosture, IE_LOWER, IE_UPPER, POSTURE_MIDPOINT};

use serde::{Deserialize, Serialize};

/// Result of one strategic aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyEvaluation {
    pub factors: FactorSet,
    pub ife: f64,
    pub efe: f64,
    pub posture: StrategicPosture,
    pub ie_region: IeRegion,
}

impl StrategyEvaluation {
    /// Aggregates both factor lists and classifies the pair.
    pub fn evaluate(factors: FactorSet) -> Self {
        let ife = factors.ife();
        let efe = factors.efe();
        Self {
            posture: StrategicPosture::classify(ife, efe),
            ie_region: IeRegion::locate(ife, efe),
            factors,
            ife,
            efe,
        }
    }
}

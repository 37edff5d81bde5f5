//! BCG-style positioning of each SCOR category against IoT readiness.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{round_to, ScorCategory};
use crate::domain::scoring::Scorecard;

/// Split point on both BCG axes.
pub const BCG_MIDPOINT: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BcgQuadrant {
    Star,
    QuestionMark,
    CashCow,
    Dog,
}

impl BcgQuadrant {
    /// x is category readiness, y is IoT readiness.
    pub fn classify(x: f64, y: f64) -> Self {
        match (x >= BCG_MIDPOINT, y >= BCG_MIDPOINT) {
            (true, true) => BcgQuadrant::Star,
            (false, true) => BcgQuadrant::QuestionMark,
            (true, false) => BcgQuadrant::CashCow,
            (false, false) => BcgQuadrant::Dog,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BcgQuadrant::Star => "Star",
            BcgQuadrant::QuestionMark => "Question Mark",
            BcgQuadrant::CashCow => "Cash Cow",
            BcgQuadrant::Dog => "Dog",
        }
    }
}

impl fmt::Display for BcgQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Plotted position of one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BcgPosition {
    pub category: ScorCategory,
    pub x: f64,
    pub y: f64,
    pub quadrant: BcgQuadrant,
}

/// Positions every category, both coordinates rounded to 2 dp on the
/// canonical scale.
pub fn bcg_positions(scorecard: &Scorecard, iot_average: f64) -> Vec<BcgPosition> {
    let y = round_to(iot_average, 2);
    scorecard
        .iter()
        .map(|score| {
            let x = round_to(score.canonical_average(), 2);
            BcgPosition {
                category: score.category,
                x,
                y,
                quadrant: BcgQuadrant::classify(x, y),
            }
        })
        .collect()
}

//! Tier classification and the rating scales it is computed against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative classification of a readiness value.
///
/// Ordering is `Weak < Moderate < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Weak,
    Moderate,
    Strong,
}

impl Tier {
    /// Returns all tiers from lowest to highest.
    pub fn all() -> &'static [Tier; 3] {
        &[Tier::Weak, Tier::Moderate, Tier::Strong]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Weak => "Weak",
            Tier::Moderate => "Moderate",
            Tier::Strong => "Strong",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Two cut points splitting a value range into three tiers.
///
/// Each cut point is inclusive on the lower bound of the higher tier:
/// `value < lower` is weak, `value < upper` is moderate, anything else strong.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub lower: f64,
    pub upper: f64,
}

impl Thresholds {
    /// Creates a pair of cut points.
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Classifies a value against the two cut points.
    pub fn classify(&self, value: f64) -> Tier {
        if value < self.lower {
            Tier::Weak
        } else if value < self.upper {
            Tier::Moderate
        } else {
            Tier::Strong
        }
    }
}

/// Cut points for SCOR category averages on the canonical 1-5 scale.
pub const CATEGORY_THRESHOLDS: Thresholds = Thresholds::new(2.5, 4.0);

/// Cut points for the IoT narrative band on the canonical 1-5 scale.
pub const IOT_THRESHOLDS: Thresholds = Thresholds::new(2.0, 4.0);

/// Cut points for competitive profile scores (1-5 weighted sums).
pub const COMPETITIVE_THRESHOLDS: Thresholds = Thresholds::new(3.0, 4.0);

/// Scale a readiness value was collected on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingScale {
    /// Integer Likert ratings from 1 to 5. This is the canonical scale.
    #[default]
    Likert,
    /// Slider values from 0 to 100.
    Percent,
}

impl RatingScale {
    /// Lowest value on the scale.
    pub fn min(&self) -> f64 {
        match self {
            RatingScale::Likert => 1.0,
            RatingScale::Percent => 0.0,
        }
    }

    /// Highest value on the scale.
    pub fn max(&self) -> f64 {
        match self {
            RatingScale::Likert => 5.0,
            RatingScale::Percent => 100.0,
        }
    }

    /// Converts a value on this scale to the canonical 1-5 scale.
    ///
    /// Percent maps linearly: 0 -> 1, 100 -> 5.
    pub fn to_canonical(&self, value: f64) -> f64 {
        match self {
            RatingScale::Likert => value,
            RatingScale::Percent => 1.0 + value * 4.0 / 100.0,
        }
    }
}

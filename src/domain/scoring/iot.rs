//! IoT readiness sub-score over a fixed four-question block.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Tier, IOT_THRESHOLDS};

/// Number of questions in the IoT block.
pub const IOT_QUESTION_COUNT: usize = 4;

/// The four IoT readiness prompts, in answer order.
pub const IOT_QUESTIONS: [&str; IOT_QUESTION_COUNT] = [
    "Do you use sensors on assets and shipments?",
    "Do you have real-time monitoring dashboards?",
    "Do you analyse operational data in real time?",
    "Is sensor data integrated with your ERP?",
];

/// Averaged answers to the IoT block, on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IotReadiness {
    pub ratings: [u8; IOT_QUESTION_COUNT],
    pub average: f64,
}

impl IotReadiness {
    /// Averages the four answers.
    pub fn from_ratings(ratings: [u8; IOT_QUESTION_COUNT]) -> Self {
        let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
        Self {
            ratings,
            average: f64::from(sum) / IOT_QUESTION_COUNT as f64,
        }
    }

    /// Narrative band used to pick the IoT recommendation.
    pub fn band(&self) -> Tier {
        IOT_THRESHOLDS.classify(self.average)
    }
}

impl Default for IotReadiness {
    /// Neutral answers, matching the initial slider position.
    fn default() -> Self {
        Self::from_ratings([3; IOT_QUESTION_COUNT])
    }
}

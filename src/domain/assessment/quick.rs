//! Quick assessment: one 0-100 slider per category.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    round_to, CategoryValues, RatingScale, ScorCategory, SliderValue, Tier, Timestamp,
    CATEGORY_THRESHOLDS,
};
use crate::domain::scoring::Scorecard;

/// The single prompt shown for each category.
pub fn quick_prompt(category: ScorCategory) -> &'static str {
    match category {
        ScorCategory::Plan => "Do you rely on AI-backed predictive analytics for planning?",
        ScorCategory::Source => "Are you integrated with suppliers that use smart technologies?",
        ScorCategory::Make => "Do you use automation or smart robotics on production lines?",
        ScorCategory::Deliver => "Do you have a smart shipment tracking system?",
        ScorCategory::Return => "Do you process returns with advanced analytics?",
    }
}

/// Result of a quick assessment. `company` may be blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAssessment {
    pub company: String,
    pub sliders: CategoryValues<u8>,
    pub scorecard: Scorecard,
    /// Mean of the five sliders on the 0-100 scale, rounded to 1 dp.
    pub total: f64,
}

impl QuickAssessment {
    pub fn evaluate(company: impl Into<String>, sliders: CategoryValues<SliderValue>) -> Self {
        let sliders = sliders.map(|_, v| v.value());
        let averages = sliders.map(|_, v| f64::from(*v));
        let scorecard = Scorecard::from_averages(averages, RatingScale::Percent);
        Self {
            company: company.into().trim().to_string(),
            sliders,
            total: round_to(scorecard.overall(), 1),
            scorecard,
        }
    }

    /// Storable row, or `None` when no company was given.
    pub fn to_record(&self) -> Option<QuickAssessmentRecord> {
        if self.company.is_empty() {
            return None;
        }
        Some(QuickAssessmentRecord {
            company: self.company.clone(),
            recorded_at: Timestamp::now(),
            sliders: self.sliders,
            total: self.total,
        })
    }

    /// Tier of the overall total, classified on the canonical scale.
    pub fn overall_tier(&self) -> Tier {
        CATEGORY_THRESHOLDS.classify(RatingScale::Percent.to_canonical(self.total))
    }
}

/// Stored quick assessment: company, date, the five sliders and the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAssessmentRecord {
    pub company: String,
    pub recorded_at: Timestamp,
    pub sliders: CategoryValues<u8>,
    pub total: f64,
}

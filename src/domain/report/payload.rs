//! Export payload: every computed value as plain serializable data.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{AssessmentState, RespondentProfile};
use crate::domain::foundation::{
    round_to, AssessmentId, DomainError, ErrorCode, RatingScale, ScorCategory, Tier, Timestamp,
};
use crate::domain::recommendation::Recommendations;
use crate::domain::strategy::{BcgPosition, StrategyEvaluation, WeightedFactor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCategory {
    pub category: ScorCategory,
    pub label: String,
    /// Average on the collected scale, rounded to 2 dp.
    pub average: f64,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportIot {
    pub average: f64,
    pub band: Tier,
}

/// SWOT groups with category display labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSwot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStrategy {
    pub ife: f64,
    pub efe: f64,
    pub posture: String,
    pub ie_region: String,
    /// Coarse strategy: "Grow", "Hold" or "Harvest/Exit".
    pub ie_strategy: String,
    pub internal_factors: Vec<WeightedFactor>,
    pub external_factors: Vec<WeightedFactor>,
}

impl From<&StrategyEvaluation> for ReportStrategy {
    fn from(eval: &StrategyEvaluation) -> Self {
        Self {
            ife: round_to(eval.ife, 2),
            efe: round_to(eval.efe, 2),
            posture: eval.posture.label().to_string(),
            ie_region: eval.ie_region.label(),
            ie_strategy: eval.ie_region.action().export_strategy().to_string(),
            internal_factors: eval.factors.internal.clone(),
            external_factors: eval.factors.external.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCompetitor {
    pub name: String,
    pub score: f64,
    pub rank: usize,
    pub band: Tier,
}

/// Everything an export format needs, detached from the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub assessment_id: AssessmentId,
    pub generated_at: Timestamp,
    pub respondent: RespondentProfile,
    pub scale: RatingScale,
    pub categories: Vec<ReportCategory>,
    pub overall: f64,
    pub iot: ReportIot,
    pub swot: ReportSwot,
    pub strategy: Option<ReportStrategy>,
    pub bcg: Vec<BcgPosition>,
    /// Ranked, best first.
    pub competitive: Vec<ReportCompetitor>,
    pub recommendations: Recommendations,
    pub notes: String,
}

impl AssessmentReport {
    /// Builds the report for a scored assessment.
    ///
    /// # Errors
    /// - `AssessmentNotScored` if no ratings were submitted
    pub fn build(state: &AssessmentState) -> Result<Self, DomainError> {
        let not_scored = || {
            DomainError::new(
                ErrorCode::AssessmentNotScored,
                "Assessment has no submitted ratings",
            )
            .with_detail("assessment_id", state.id.to_string())
        };
        let scored = state.scored.as_ref().ok_or_else(not_scored)?;
        let swot = state.swot().ok_or_else(not_scored)?;
        let recommendations = state.recommendations().ok_or_else(not_scored)?;
        let bcg = state.bcg().unwrap_or_default();

        let labels = |cats: &[ScorCategory]| -> Vec<String> {
            cats.iter().map(|c| c.display_name().to_string()).collect()
        };

        let competitive = state
            .competitive
            .as_ref()
            .map(|profile| {
                profile
                    .ranked()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, entry)| ReportCompetitor {
                        name: entry.name.clone(),
                        score: entry.display_score(),
                        rank: idx + 1,
                        band: entry.band(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            assessment_id: state.id,
            generated_at: Timestamp::now(),
            respondent: state.respondent.clone(),
            scale: scored.scorecard.scale(),
            categories: scored
                .scorecard
                .iter()
                .map(|score| ReportCategory {
                    category: score.category,
                    label: score.category.display_name().to_string(),
                    average: round_to(score.average, 2),
                    tier: score.tier(),
                })
                .collect(),
            overall: round_to(scored.scorecard.overall(), 2),
            iot: ReportIot {
                average: round_to(scored.iot.average, 2),
                band: scored.iot.band(),
            },
            swot: ReportSwot {
                strengths: labels(&swot.strengths),
                weaknesses: labels(&swot.weaknesses),
                opportunities: labels(&swot.opportunities),
                threats: swot.threats.clone(),
            },
            strategy: state.strategy.as_ref().map(ReportStrategy::from),
            bcg,
            competitive,
            recommendations,
            notes: scored.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::sample_state as full_state;

    #[test]
    fn unscored_state_has_no_report() {
        let profile = RespondentProfile::new("Sam", "Acme", "", "", false).unwrap();
        let err = AssessmentReport::build(&AssessmentState::start(profile)).unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotScored);
    }

    #[test]
    fn report_carries_every_section() {
        let report = AssessmentReport::build(&full_state()).unwrap();

        assert_eq!(report.categories.len(), 5);
        assert_eq!(report.categories[1].average, 2.33);
        assert_eq!(report.swot.strengths, vec!["Plan", "Make"]);
        assert_eq!(report.iot.average, 3.5);
        assert_eq!(report.bcg.len(), 5);

        let strategy = report.strategy.as_ref().unwrap();
        assert_eq!(strategy.ife, 1.2);
        assert_eq!(strategy.ie_region, "IX (Exit)");
        assert_eq!(strategy.ie_strategy, "Harvest/Exit");

        assert_eq!(report.competitive[0].name, "Rival");
        assert_eq!(report.competitive[1].rank, 2);
        assert_eq!(report.notes, "Two plants");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = AssessmentReport::build(&full_state()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["respondent"]["company"], "Acme");
        assert_eq!(json["categories"][0]["tier"], "strong");
        assert_eq!(json["strategy"]["posture"], "Survival Strategy");
    }
}

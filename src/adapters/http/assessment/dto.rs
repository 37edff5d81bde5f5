//! HTTP DTOs for assessment endpoints.
//!
//! Request bodies carry raw numbers; range checks happen in the application
//! handlers so every violation is reported the same way.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CompetitorInput, DispatchResult, FactorInput};
use crate::domain::assessment::{
    AssessmentState, QuickAssessment, QuickAssessmentRecord, RespondentProfile,
};
use crate::domain::benchmark::DispatchStatus;
use crate::domain::foundation::{round_to, CategoryValues, RatingScale, ScorCategory, Tier};
use crate::domain::report::{ReportCompetitor, ReportStrategy, ReportSwot};
use crate::domain::strategy::BcgPosition;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start an assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct StartAssessmentRequest {
    #[serde(default)]
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub consent: bool,
}

/// Request to submit questionnaire ratings.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRatingsRequest {
    /// One list per category, keyed `plan`, `source`, `make`, `deliver`, `return`.
    pub ratings: CategoryValues<Vec<u8>>,
    #[serde(default)]
    pub iot_ratings: Option<Vec<u8>>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FactorRequest {
    pub label: String,
    pub weight: f64,
    pub rating: u8,
}

impl From<FactorRequest> for FactorInput {
    fn from(req: FactorRequest) -> Self {
        Self {
            label: req.label,
            weight: req.weight,
            rating: req.rating,
        }
    }
}

/// Request to run the strategic aggregation. Omitted lists use defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateStrategyRequest {
    #[serde(default)]
    pub threats: Option<Vec<String>>,
    #[serde(default)]
    pub internal: Option<Vec<FactorRequest>>,
    #[serde(default)]
    pub external: Option<Vec<FactorRequest>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitorRequest {
    pub name: String,
    pub ratings: CategoryValues<f64>,
}

impl From<CompetitorRequest> for CompetitorInput {
    fn from(req: CompetitorRequest) -> Self {
        Self {
            name: req.name,
            ratings: req.ratings,
        }
    }
}

/// Request to build the Competitive Profile Matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareCompetitorsRequest {
    pub weights: CategoryValues<f64>,
    pub entities: Vec<CompetitorRequest>,
}

/// Request to push the report to a webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchRequest {
    pub url: String,
}

/// Request for a quick assessment. A blank company is scored but not stored.
#[derive(Debug, Clone, Deserialize)]
pub struct QuickAssessmentRequest {
    #[serde(default)]
    pub company: String,
    pub sliders: CategoryValues<u8>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreResponse {
    pub category: ScorCategory,
    pub label: String,
    /// Average on the collected scale, rounded to 2 dp.
    pub average: f64,
    pub tier: Tier,
}

#[derive(Debug, Clone, Serialize)]
pub struct IotResponse {
    pub ratings: Vec<u8>,
    pub average: f64,
    pub band: Tier,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoresResponse {
    pub scale: RatingScale,
    pub categories: Vec<CategoryScoreResponse>,
    pub overall: f64,
    pub iot: IotResponse,
    pub swot: ReportSwot,
    pub bcg: Vec<BcgPosition>,
    pub notes: String,
}

/// Full view of an assessment session.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub respondent: RespondentProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoresResponse>,
    pub threats: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ReportStrategy>,
    /// Ranked, best first; empty until competitors are compared.
    pub competitive: Vec<ReportCompetitor>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&AssessmentState> for AssessmentResponse {
    fn from(state: &AssessmentState) -> Self {
        let scores = state.scored.as_ref().map(|scored| {
            let swot = state.swot().unwrap_or_default();
            let labels = |cats: &[ScorCategory]| -> Vec<String> {
                cats.iter().map(|c| c.display_name().to_string()).collect()
            };
            ScoresResponse {
                scale: scored.scorecard.scale(),
                categories: scored
                    .scorecard
                    .iter()
                    .map(|score| CategoryScoreResponse {
                        category: score.category,
                        label: score.category.display_name().to_string(),
                        average: round_to(score.average, 2),
                        tier: score.tier(),
                    })
                    .collect(),
                overall: round_to(scored.scorecard.overall(), 2),
                iot: IotResponse {
                    ratings: scored.iot.ratings.to_vec(),
                    average: round_to(scored.iot.average, 2),
                    band: scored.iot.band(),
                },
                swot: ReportSwot {
                    strengths: labels(&swot.strengths),
                    weaknesses: labels(&swot.weaknesses),
                    opportunities: labels(&swot.opportunities),
                    threats: swot.threats.clone(),
                },
                bcg: state.bcg().unwrap_or_default(),
                notes: scored.notes.clone(),
            }
        });

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

        Self {
            id: state.id.to_string(),
            respondent: state.respondent.clone(),
            scores,
            threats: state.threats.clone(),
            strategy: state.strategy.as_ref().map(ReportStrategy::from),
            competitive,
            created_at: state.created_at.as_datetime().to_rfc3339(),
            updated_at: state.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response to a ratings submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRatingsResponse {
    pub assessment: AssessmentResponse,
    /// Id of the stored benchmark record, when the respondent consented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchResponse {
    pub status: DispatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub logged_at: String,
}

impl From<DispatchResult> for DispatchResponse {
    fn from(result: DispatchResult) -> Self {
        Self {
            status: result.status,
            status_code: result.status_code,
            error: result.error,
            logged_at: result.entry.logged_at.as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickAssessmentResponse {
    pub company: String,
    pub categories: Vec<CategoryScoreResponse>,
    /// Mean of the sliders on the 0-100 scale, to 1 dp.
    pub total: f64,
    pub tier: Tier,
}

impl From<QuickAssessment> for QuickAssessmentResponse {
    fn from(quick: QuickAssessment) -> Self {
        Self {
            categories: quick
                .scorecard
                .iter()
                .map(|score| CategoryScoreResponse {
                    category: score.category,
                    label: score.category.display_name().to_string(),
                    average: round_to(score.average, 2),
                    tier: score.tier(),
                })
                .collect(),
            total: quick.total,
            tier: quick.overall_tier(),
            company: quick.company,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickAssessmentListResponse {
    pub items: Vec<QuickAssessmentRecord>,
    pub total: usize,
}

impl From<Vec<QuickAssessmentRecord>> for QuickAssessmentListResponse {
    fn from(items: Vec<QuickAssessmentRecord>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{IotReadiness, Scorecard};

    #[test]
    fn ratings_request_uses_return_key() {
        let json = r#"{
            "ratings": {"plan": [4], "source": [2], "make": [5], "deliver": [1], "return": [3]},
            "iot_ratings": [3, 3, 4, 4]
        }"#;
        let req: SubmitRatingsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ratings.return_, vec![3]);
        assert!(req.notes.is_none());
    }

    #[test]
    fn ratings_request_requires_every_category() {
        let json = r#"{"ratings": {"plan": [4], "source": [2], "make": [5], "deliver": [1]}}"#;
        assert!(serde_json::from_str::<SubmitRatingsRequest>(json).is_err());
    }

    #[test]
    fn strategy_request_fields_are_optional() {
        let req: EvaluateStrategyRequest = serde_json::from_str("{}").unwrap();
        assert!(req.threats.is_none());
        assert!(req.internal.is_none());
    }

    #[test]
    fn unscored_state_omits_scores() {
        let profile = RespondentProfile::new("Sam", "Acme", "", "", false).unwrap();
        let state = AssessmentState::start(profile);
        let json = serde_json::to_value(AssessmentResponse::from(&state)).unwrap();
        assert!(json.get("scores").is_none());
        assert_eq!(json["respondent"]["company"], "Acme");
    }

    #[test]
    fn scored_state_lists_categories_in_order() {
        let profile = RespondentProfile::new("Sam", "Acme", "", "", false).unwrap();
        let state = AssessmentState::start(profile).with_scores(
            Scorecard::from_averages(
                CategoryValues::new(4.0, 7.0 / 3.0, 5.0, 1.5, 3.0),
                RatingScale::Likert,
            ),
            IotReadiness::default(),
            "",
        );
        let response = AssessmentResponse::from(&state);
        let scores = response.scores.unwrap();
        assert_eq!(scores.categories[1].average, 2.33);
        assert_eq!(scores.categories[1].tier, Tier::Weak);
        assert_eq!(scores.swot.opportunities, vec!["Return".to_string()]);
        assert_eq!(scores.bcg.len(), 5);
    }
}

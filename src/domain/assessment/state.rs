//! Immutable per-session assessment state.
//!
//! Every recomputation produces a new `AssessmentState`; stores replace
//! the previous value instead of mutating it.

use serde::{Deserialize, Serialize};

use crate::domain::competitive::CompetitiveProfile;
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::domain::recommendation::Recommendations;
use crate::domain::scoring::{IotReadiness, Scorecard, SwotGroups};
use crate::domain::strategy::{bcg_positions, BcgPosition, FactorSet, StrategyEvaluation};

use super::RespondentProfile;

/// Scores and notes produced by one ratings submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAssessment {
    pub scorecard: Scorecard,
    pub iot: IotReadiness,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentState {
    pub id: AssessmentId,
    pub respondent: RespondentProfile,
    pub scored: Option<ScoredAssessment>,
    /// Externally supplied threats; never derived from scores.
    pub threats: Vec<String>,
    pub strategy: Option<StrategyEvaluation>,
    pub competitive: Option<CompetitiveProfile>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AssessmentState {
    /// Starts a new, unscored assessment.
    pub fn start(respondent: RespondentProfile) -> Self {
        let now = Timestamp::now();
        Self {
            id: AssessmentId::new(),
            respondent,
            scored: None,
            threats: Vec::new(),
            strategy: None,
            competitive: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.scored.is_some()
    }

    pub fn scorecard(&self) -> Option<&Scorecard> {
        self.scored.as_ref().map(|s| &s.scorecard)
    }

    pub fn iot(&self) -> Option<&IotReadiness> {
        self.scored.as_ref().map(|s| &s.iot)
    }

    /// SWOT groups of the current scores, with the supplied threats.
    pub fn swot(&self) -> Option<SwotGroups> {
        self.scorecard()
            .map(|card| card.swot().with_threats(self.threats.iter().cloned()))
    }

    /// Default-weighted factors for the current SWOT groups.
    pub fn default_factors(&self) -> Option<FactorSet> {
        self.swot().map(|swot| FactorSet::defaults_for(&swot))
    }

    /// BCG position of every category against IoT readiness.
    pub fn bcg(&self) -> Option<Vec<BcgPosition>> {
        self.scored
            .as_ref()
            .map(|s| bcg_positions(&s.scorecard, s.iot.average))
    }

    /// Recommendations for the current state, if scored.
    pub fn recommendations(&self) -> Option<Recommendations> {
        let scored = self.scored.as_ref()?;
        let swot = self.swot()?;
        let competitive = self
            .competitive
            .as_ref()
            .map(|profile| (profile, self.respondent.company.as_str()));
        Some(Recommendations::build(
            &scored.scorecard,
            &swot,
            Some(&scored.iot),
            competitive,
        ))
    }

    /// New state with fresh scores.
    ///
    /// A previous strategy evaluation was built from the old SWOT groups,
    /// so it is dropped.
    pub fn with_scores(&self, scorecard: Scorecard, iot: IotReadiness, notes: impl Into<String>) -> Self {
        Self {
            scored: Some(ScoredAssessment {
                scorecard,
                iot,
                notes: notes.into(),
            }),
            strategy: None,
            updated_at: Timestamp::now(),
            ..self.clone()
        }
    }

    /// New state with the given threats.
    pub fn with_threats(&self, threats: Vec<String>) -> Self {
        Self {
            threats,
            updated_at: Timestamp::now(),
            ..self.clone()
        }
    }

    pub fn with_strategy(&self, strategy: StrategyEvaluation) -> Self {
        Self {
            strategy: Some(strategy),
            updated_at: Timestamp::now(),
            ..self.clone()
        }
    }

    pub fn with_competitive(&self, profile: CompetitiveProfile) -> Self {
        Self {
            competitive: Some(profile),
            updated_at: Timestamp::now(),
            ..self.clone()
        }
    }

    /// CPM score of the assessed company, if it was compared.
    pub fn company_cpm_score(&self) -> Option<f64> {
        self.competitive
            .as_ref()
            .and_then(|p| p.score_of(&self.respondent.company))
    }
}

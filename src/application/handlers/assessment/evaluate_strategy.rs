//! EvaluateStrategyHandler - Runs IFE/EFE aggregation on a scored assessment.
//!
//! Factors default to one entry per SWOT label (weight 0.1, rating 3).
//! Callers may override either list with explicit weights and ratings.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::AssessmentState;
use crate::domain::foundation::{AssessmentId, DomainError, FactorRating, Weight};
use crate::domain::strategy::{StrategyEvaluation, WeightedFactor};
use crate::ports::AssessmentSessionStore;

use super::load_scored;

/// A caller-supplied factor row.
#[derive(Debug, Clone)]
pub struct FactorInput {
    pub label: String,
    pub weight: f64,
    pub rating: u8,
}

#[derive(Debug, Clone, Default)]
pub struct EvaluateStrategyCommand {
    pub assessment_id: AssessmentId,
    /// Replaces the stored threats when present.
    pub threats: Option<Vec<String>>,
    pub internal: Option<Vec<FactorInput>>,
    pub external: Option<Vec<FactorInput>>,
}

pub struct EvaluateStrategyHandler {
    sessions: Arc<dyn AssessmentSessionStore>,
}

impl EvaluateStrategyHandler {
    pub fn new(sessions: Arc<dyn AssessmentSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: EvaluateStrategyCommand) -> Result<AssessmentState, DomainError> {
        let mut state = load_scored(self.sessions.as_ref(), &cmd.assessment_id).await?;

        if let Some(threats) = cmd.threats {
            let threats = threats
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            state = state.with_threats(threats);
        }

        let mut factors = state.default_factors().unwrap_or_default();
        if let Some(internal) = cmd.internal {
            factors.internal = to_factors("internal", internal)?;
        }
        if let Some(external) = cmd.external {
            factors.external = to_factors("external", external)?;
        }

        let evaluation = StrategyEvaluation::evaluate(factors);
        info!(
            assessment_id = %state.id,
            ife = evaluation.ife,
            efe = evaluation.efe,
            posture = %evaluation.posture,
            ie_region = %evaluation.ie_region,
            "Strategy evaluated"
        );

        let next = state.with_strategy(evaluation);
        self.sessions.put(&next).await?;
        Ok(next)
    }
}

fn to_factors(list: &str, inputs: Vec<FactorInput>) -> Result<Vec<WeightedFactor>, DomainError> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(idx, input)| {
            let label = input.label.trim();
            if label.is_empty() {
                return Err(DomainError::validation(
                    format!("{}[{}].label", list, idx),
                    "Factor label cannot be empty",
                ));
            }
            let weight = Weight::try_new(input.weight)?;
            let rating = FactorRating::try_new(input.rating)?;
            Ok(WeightedFactor::new(label, weight.value(), rating.value()))
        })
        .collect()
}

//! CompareCompetitorsHandler - Builds the Competitive Profile Matrix.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::AssessmentState;
use crate::domain::competitive::{CompetitiveComparator, EntityRatings};
use crate::domain::foundation::{
    AssessmentId, CategoryValues, ContinuousRating, DomainError, Weight,
};
use crate::ports::AssessmentSessionStore;

/// One entity to compare, usually the assessed company and its rivals.
#[derive(Debug, Clone)]
pub struct CompetitorInput {
    pub name: String,
    pub ratings: CategoryValues<f64>,
}

#[derive(Debug, Clone)]
pub struct CompareCompetitorsCommand {
    pub assessment_id: AssessmentId,
    /// Shared category weights; must sum to 1.0 within 0.05.
    pub weights: CategoryValues<f64>,
    pub entities: Vec<CompetitorInput>,
}

pub struct CompareCompetitorsHandler {
    sessions: Arc<dyn AssessmentSessionStore>,
}

impl CompareCompetitorsHandler {
    pub fn new(sessions: Arc<dyn AssessmentSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: CompareCompetitorsCommand) -> Result<AssessmentState, DomainError> {
        let state = self.sessions.get(&cmd.assessment_id).await?;

        for (_, weight) in cmd.weights.iter() {
            Weight::try_new(*weight)?;
        }

        if cmd.entities.is_empty() {
            return Err(DomainError::validation(
                "entities",
                "At least one entity is required",
            ));
        }

        let mut seen = HashSet::with_capacity(cmd.entities.len());
        let mut entities = Vec::with_capacity(cmd.entities.len());
        for (idx, input) in cmd.entities.into_iter().enumerate() {
            let name = input.name.trim().to_string();
            if name.is_empty() {
                return Err(DomainError::validation(
                    format!("entities[{}].name", idx),
                    "Entity name cannot be empty",
                ));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(DomainError::validation(
                    format!("entities[{}].name", idx),
                    format!("Entity '{}' is listed more than once", name),
                ));
            }
            for (_, rating) in input.ratings.iter() {
                ContinuousRating::try_new(*rating)?;
            }
            entities.push(EntityRatings::new(name, input.ratings));
        }

        let company = state.respondent.company.as_str();
        if !entities.iter().any(|e| e.name == company) {
            return Err(DomainError::validation(
                "entities",
                format!("Entities must include the assessed company '{}'", company),
            ));
        }

        let profile = CompetitiveComparator::compare(&cmd.weights, &entities)?;
        info!(
            assessment_id = %state.id,
            entities = profile.entries.len(),
            leader = profile.leader().map(|e| e.name.as_str()).unwrap_or_default(),
            "Competitive profile computed"
        );

        let next = state.with_competitive(profile);
        self.sessions.put(&next).await?;
        Ok(next)
    }
}

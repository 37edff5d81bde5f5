//! Assessment queries: current state and recommendations.

use std::sync::Arc;

use crate::domain::assessment::AssessmentState;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::domain::recommendation::Recommendations;
use crate::ports::AssessmentSessionStore;

use super::load_scored;

pub struct GetAssessmentHandler {
    sessions: Arc<dyn AssessmentSessionStore>,
}

impl GetAssessmentHandler {
    pub fn new(sessions: Arc<dyn AssessmentSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, id: AssessmentId) -> Result<AssessmentState, DomainError> {
        Ok(self.sessions.get(&id).await?)
    }
}

/// Selects narratives for a scored assessment.
pub struct GetRecommendationsHandler {
    sessions: Arc<dyn AssessmentSessionStore>,
}

impl GetRecommendationsHandler {
    pub fn new(sessions: Arc<dyn AssessmentSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, id: AssessmentId) -> Result<Recommendations, DomainError> {
        let state = load_scored(self.sessions.as_ref(), &id).await?;
        state.recommendations().ok_or_else(|| {
            DomainError::new(
                ErrorCode::AssessmentNotScored,
                "Assessment has no submitted ratings",
            )
        })
    }
}

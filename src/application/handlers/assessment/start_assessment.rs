//! StartAssessmentHandler - Opens a new assessment session for a respondent.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{AssessmentState, RespondentProfile};
use crate::domain::foundation::DomainError;
use crate::ports::AssessmentSessionStore;

/// Command to start an assessment.
#[derive(Debug, Clone)]
pub struct StartAssessmentCommand {
    pub name: String,
    pub company: String,
    pub sector: String,
    pub country: String,
    /// Whether a completed scoring may be stored for benchmarking.
    pub consent: bool,
}

pub struct StartAssessmentHandler {
    sessions: Arc<dyn AssessmentSessionStore>,
}

impl StartAssessmentHandler {
    pub fn new(sessions: Arc<dyn AssessmentSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: StartAssessmentCommand) -> Result<AssessmentState, DomainError> {
        let profile = RespondentProfile::new(cmd.name, cmd.company, cmd.sector, cmd.country, cmd.consent)?;
        let state = AssessmentState::start(profile);
        self.sessions.put(&state).await?;

        info!(
            assessment_id = %state.id,
            company = %state.respondent.company,
            consent = state.respondent.consent,
            "Assessment started"
        );
        Ok(state)
    }
}

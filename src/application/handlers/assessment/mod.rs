//! Assessment command and query handlers.
//!
//! Every command loads the current `AssessmentState`, derives a new state and
//! stores it in place of the old one.

mod compare_competitors;
mod dispatch_report;
mod evaluate_strategy;
mod export_report;
mod get_assessment;
mod quick_assessment;
mod start_assessment;
mod submit_ratings;

pub use compare_competitors::{
    CompareCompetitorsCommand, CompareCompetitorsHandler, CompetitorInput,
};
pub use dispatch_report::{DispatchReportCommand, DispatchReportHandler, DispatchResult};
pub use evaluate_strategy::{EvaluateStrategyCommand, EvaluateStrategyHandler, FactorInput};
pub use export_report::{ExportReportHandler, ExportReportQuery};
pub use get_assessment::{GetAssessmentHandler, GetRecommendationsHandler};
pub use quick_assessment::{
    ListQuickAssessmentsHandler, QuickAssessmentCommand, QuickAssessmentHandler,
};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler};
pub use submit_ratings::{SubmitRatingsCommand, SubmitRatingsHandler, SubmitRatingsResult};

use crate::domain::assessment::AssessmentState;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::AssessmentSessionStore;

/// Loads a state that already has submitted ratings.
pub(crate) async fn load_scored(
    sessions: &dyn AssessmentSessionStore,
    id: &AssessmentId,
) -> Result<AssessmentState, DomainError> {
    let state = sessions.get(id).await?;
    if !state.is_scored() {
        return Err(DomainError::new(
            ErrorCode::AssessmentNotScored,
            "Submit ratings before running this step",
        )
        .with_detail("assessment_id", id.to_string()));
    }
    Ok(state)
}

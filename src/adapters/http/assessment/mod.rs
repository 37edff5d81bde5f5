//! HTTP adapter for assessment, questionnaire and quick-assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AssessmentResponse, CompareCompetitorsRequest, DispatchRequest, DispatchResponse,
    EvaluateStrategyRequest, QuickAssessmentListResponse, QuickAssessmentRequest,
    QuickAssessmentResponse, StartAssessmentRequest, SubmitRatingsRequest, SubmitRatingsResponse,
};
pub use handlers::AssessmentAppState;
pub use routes::assessment_router;

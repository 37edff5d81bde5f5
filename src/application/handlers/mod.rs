//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod benchmark;
pub mod questions;

pub use assessment::{
    CompareCompetitorsCommand, CompareCompetitorsHandler, CompetitorInput, DispatchReportCommand,
    DispatchReportHandler, DispatchResult, EvaluateStrategyCommand, EvaluateStrategyHandler,
    ExportReportHandler, ExportReportQuery, FactorInput, GetAssessmentHandler,
    GetRecommendationsHandler, ListQuickAssessmentsHandler, QuickAssessmentCommand, QuickAssessmentHandler,
    StartAssessmentCommand, StartAssessmentHandler, SubmitRatingsCommand, SubmitRatingsHandler,
    SubmitRatingsResult,
};
pub use benchmark::{
    CompanyTrendHandler, ComparisonLogHandler, ComparisonSummaryHandler, ListRecordsHandler,
    LogCounts, LogCountsHandler,
};
pub use questions::{CategoryQuestions, GetQuestionsHandler, Questionnaire};

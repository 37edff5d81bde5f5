//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers replace the stored assessment state; query handlers only
//! read.

pub mod handlers;

pub use handlers::{
    // Assessment commands
    CompareCompetitorsCommand, CompareCompetitorsHandler, DispatchReportCommand,
    DispatchReportHandler, EvaluateStrategyCommand, EvaluateStrategyHandler,
    QuickAssessmentCommand, QuickAssessmentHandler, StartAssessmentCommand,
    StartAssessmentHandler, SubmitRatingsCommand, SubmitRatingsHandler,
    // Assessment queries
    ExportReportHandler, ExportReportQuery, GetAssessmentHandler, GetRecommendationsHandler,
    ListQuickAssessmentsHandler,
    // Benchmark and questionnaire queries
    CompanyTrendHandler, ComparisonLogHandler, ComparisonSummaryHandler, GetQuestionsHandler,
    ListRecordsHandler, LogCountsHandler,
};

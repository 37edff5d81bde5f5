//! Route configuration for assessment endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    compare_competitors, dispatch_report, evaluate_strategy, export_report, get_assessment,
    get_questions, get_recommendations, list_quick_assessments, quick_assessment,
    start_assessment, submit_ratings, AssessmentAppState,
};

/// Creates the assessment router.
///
/// Routes:
/// - `GET /api/questions` - Questionnaire
/// - `POST /api/quick-assessments` - Quick slider assessment
/// - `GET /api/quick-assessments` - Stored quick assessments
/// - `POST /api/assessments` - Start an assessment
/// - `GET /api/assessments/:id` - Current state
/// - `PUT /api/assessments/:id/ratings` - Submit ratings
/// - `POST /api/assessments/:id/strategy` - Strategic aggregation
/// - `POST /api/assessments/:id/competitive` - Competitive Profile Matrix
/// - `GET /api/assessments/:id/recommendations` - Narratives
/// - `GET /api/assessments/:id/export/:format` - Report download
/// - `POST /api/assessments/:id/dispatch` - Webhook delivery
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/api/questions", get(get_questions))
        .route(
            "/api/quick-assessments",
            post(quick_assessment).get(list_quick_assessments),
        )
        .route("/api/assessments", post(start_assessment))
        .route("/api/assessments/:id", get(get_assessment))
        .route("/api/assessments/:id/ratings", put(submit_ratings))
        .route("/api/assessments/:id/strategy", post(evaluate_strategy))
        .route("/api/assessments/:id/competitive", post(compare_competitors))
        .route("/api/assessments/:id/recommendations", get(get_recommendations))
        .route("/api/assessments/:id/export/:format", get(export_report))
        .route("/api/assessments/:id/dispatch", post(dispatch_report))
}

//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to the application layer. Each request
//! builds the command handler it needs from the shared ports.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    CompareCompetitorsCommand, CompareCompetitorsHandler, DispatchReportCommand,
    DispatchReportHandler, EvaluateStrategyCommand, EvaluateStrategyHandler, ExportReportHandler,
    ExportReportQuery, GetAssessmentHandler, GetQuestionsHandler, GetRecommendationsHandler,
    ListQuickAssessmentsHandler, QuickAssessmentCommand, QuickAssessmentHandler, StartAssessmentCommand, StartAssessmentHandler,
    SubmitRatingsCommand, SubmitRatingsHandler,
};
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::{
    AssessmentRecordStore, AssessmentSessionStore, ComparisonLogStore, ExportFormat,
    QuestionSource, QuickAssessmentStore, ReportExporter, ReportNotifier,
};

use super::dto::{
    AssessmentResponse, CompareCompetitorsRequest, DispatchRequest, DispatchResponse,
    EvaluateStrategyRequest, QuickAssessmentListResponse, QuickAssessmentRequest,
    QuickAssessmentResponse, StartAssessmentRequest, SubmitRatingsRequest, SubmitRatingsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all assessment dependencies.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub sessions: Arc<dyn AssessmentSessionStore>,
    pub records: Arc<dyn AssessmentRecordStore>,
    pub comparison_log: Arc<dyn ComparisonLogStore>,
    pub quick_assessments: Arc<dyn QuickAssessmentStore>,
    pub questions: Arc<dyn QuestionSource>,
    pub exporter: Arc<dyn ReportExporter>,
    pub notifier: Arc<dyn ReportNotifier>,
}

impl AssessmentAppState {
    pub fn start_handler(&self) -> StartAssessmentHandler {
        StartAssessmentHandler::new(self.sessions.clone())
    }

    pub fn submit_ratings_handler(&self) -> SubmitRatingsHandler {
        SubmitRatingsHandler::new(
            self.sessions.clone(),
            self.records.clone(),
            self.questions.clone(),
        )
    }

    pub fn strategy_handler(&self) -> EvaluateStrategyHandler {
        EvaluateStrategyHandler::new(self.sessions.clone())
    }

    pub fn competitive_handler(&self) -> CompareCompetitorsHandler {
        CompareCompetitorsHandler::new(self.sessions.clone())
    }

    pub fn quick_handler(&self) -> QuickAssessmentHandler {
        QuickAssessmentHandler::new(self.quick_assessments.clone())
    }

    pub fn export_handler(&self) -> ExportReportHandler {
        ExportReportHandler::new(self.sessions.clone(), self.exporter.clone())
    }

    pub fn dispatch_handler(&self) -> DispatchReportHandler {
        DispatchReportHandler::new(
            self.sessions.clone(),
            self.notifier.clone(),
            self.comparison_log.clone(),
        )
    }
}

fn parse_id(raw: &str) -> Result<AssessmentId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid assessment ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Questionnaire
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - The questionnaire
pub async fn get_questions(
    State(state): State<AssessmentAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let questionnaire = GetQuestionsHandler::new(state.questions.clone()).handle().await?;
    Ok(Json(questionnaire))
}

/// POST /api/quick-assessments - Five sliders, stored when a company is named
pub async fn quick_assessment(
    State(state): State<AssessmentAppState>,
    Json(request): Json<QuickAssessmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let quick = state
        .quick_handler()
        .handle(QuickAssessmentCommand {
            company: request.company,
            sliders: request.sliders,
        })
        .await?;
    Ok(Json(QuickAssessmentResponse::from(quick)))
}

/// GET /api/quick-assessments - Stored quick results
pub async fn list_quick_assessments(
    State(state): State<AssessmentAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let items = ListQuickAssessmentsHandler::new(state.quick_assessments.clone())
        .handle()
        .await?;
    Ok(Json(QuickAssessmentListResponse::from(items)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Start an assessment
pub async fn start_assessment(
    State(state): State<AssessmentAppState>,
    Json(request): Json<StartAssessmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = StartAssessmentCommand {
        name: request.name,
        company: request.company,
        sector: request.sector,
        country: request.country,
        consent: request.consent,
    };
    let assessment = state.start_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(AssessmentResponse::from(&assessment))))
}

/// PUT /api/assessments/:id/ratings - Submit ratings and score them
pub async fn submit_ratings(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    Json(request): Json<SubmitRatingsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SubmitRatingsCommand {
        assessment_id: parse_id(&id)?,
        ratings: request.ratings,
        iot_ratings: request.iot_ratings,
        notes: request.notes.unwrap_or_default(),
    };
    let result = state.submit_ratings_handler().handle(cmd).await?;

    Ok(Json(SubmitRatingsResponse {
        assessment: AssessmentResponse::from(&result.state),
        record_id: result.record_id.map(|id| id.to_string()),
    }))
}

/// POST /api/assessments/:id/strategy - IFE/EFE, posture and IE region
pub async fn evaluate_strategy(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    Json(request): Json<EvaluateStrategyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = EvaluateStrategyCommand {
        assessment_id: parse_id(&id)?,
        threats: request.threats,
        internal: request
            .internal
            .map(|list| list.into_iter().map(Into::into).collect()),
        external: request
            .external
            .map(|list| list.into_iter().map(Into::into).collect()),
    };
    let assessment = state.strategy_handler().handle(cmd).await?;

    Ok(Json(AssessmentResponse::from(&assessment)))
}

/// POST /api/assessments/:id/competitive - Competitive Profile Matrix
pub async fn compare_competitors(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    Json(request): Json<CompareCompetitorsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CompareCompetitorsCommand {
        assessment_id: parse_id(&id)?,
        weights: request.weights,
        entities: request.entities.into_iter().map(Into::into).collect(),
    };
    let assessment = state.competitive_handler().handle(cmd).await?;

    Ok(Json(AssessmentResponse::from(&assessment)))
}

/// POST /api/assessments/:id/dispatch - Push the report to a webhook
pub async fn dispatch_report(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    Json(request): Json<DispatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DispatchReportCommand {
        assessment_id: parse_id(&id)?,
        target_url: request.url,
    };
    let result = state.dispatch_handler().handle(cmd).await?;

    Ok(Json(DispatchResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/assessments/:id - Current assessment state
pub async fn get_assessment(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let assessment = GetAssessmentHandler::new(state.sessions.clone())
        .handle(parse_id(&id)?)
        .await?;
    Ok(Json(AssessmentResponse::from(&assessment)))
}

/// GET /api/assessments/:id/recommendations - Narratives for the scores
pub async fn get_recommendations(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let recommendations = GetRecommendationsHandler::new(state.sessions.clone())
        .handle(parse_id(&id)?)
        .await?;
    Ok(Json(recommendations))
}

/// GET /api/assessments/:id/export/:format - Download the report
pub async fn export_report(
    State(state): State<AssessmentAppState>,
    Path((id, format)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let assessment_id = parse_id(&id)?;
    let format: ExportFormat = format.parse().map_err(DomainError::from)?;

    let document = state
        .export_handler()
        .handle(ExportReportQuery {
            assessment_id,
            format,
        })
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    ))
}

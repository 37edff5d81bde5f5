//! HTTP handlers for benchmark endpoints.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    CompanyTrendHandler, ComparisonLogHandler, ComparisonSummaryHandler, ListRecordsHandler,
    LogCountsHandler,
};
use crate::domain::benchmark::GroupBy;
use crate::domain::foundation::DomainError;
use crate::ports::{AssessmentRecordStore, ComparisonLogStore};

use super::dto::{
    FilterQuery, LogListResponse, RecordListResponse, SummaryQuery, SummaryResponse, TrendQuery,
    TrendResponse,
};

/// Read-only access to stored records and the comparison log.
#[derive(Clone)]
pub struct BenchmarkAppState {
    pub records: Arc<dyn AssessmentRecordStore>,
    pub comparison_log: Arc<dyn ComparisonLogStore>,
}

/// GET /api/records - Stored assessment records
pub async fn list_records(
    State(state): State<BenchmarkAppState>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let records = ListRecordsHandler::new(state.records.clone())
        .handle(query.into())
        .await?;
    Ok(Json(RecordListResponse::from(records)))
}

/// GET /api/comparison-log - Logged dispatches
pub async fn list_comparison_log(
    State(state): State<BenchmarkAppState>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = ComparisonLogHandler::new(state.comparison_log.clone())
        .handle(query.into())
        .await?;
    Ok(Json(LogListResponse::from(entries)))
}

/// GET /api/comparison-log/summary?by=sector|country - Group averages
pub async fn comparison_summary(
    State(state): State<BenchmarkAppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let by: GroupBy = query.by.parse().map_err(DomainError::from)?;
    let groups = ComparisonSummaryHandler::new(state.comparison_log.clone())
        .handle(by, query.filter())
        .await?;
    Ok(Json(SummaryResponse { by, groups }))
}

/// GET /api/comparison-log/trend?company= - One company over time
pub async fn company_trend(
    State(state): State<BenchmarkAppState>,
    Query(query): Query<TrendQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let points = CompanyTrendHandler::new(state.comparison_log.clone())
        .handle(&query.company)
        .await?;
    Ok(Json(TrendResponse {
        company: query.company.trim().to_string(),
        points,
    }))
}

/// GET /api/comparison-log/counts - Rows per company and status
pub async fn log_counts(
    State(state): State<BenchmarkAppState>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let counts = LogCountsHandler::new(state.comparison_log.clone())
        .handle(query.into())
        .await?;
    Ok(Json(counts))
}

//! Route configuration for benchmark endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    company_trend, comparison_summary, list_comparison_log, list_records, log_counts,
    BenchmarkAppState,
};

/// Creates the benchmark router.
///
/// Routes:
/// - `GET /api/records` - Stored records, filtered by company/sector/country
/// - `GET /api/comparison-log` - Logged dispatches, same filters
/// - `GET /api/comparison-log/summary?by=sector|country` - Group averages
/// - `GET /api/comparison-log/trend?company=` - Company history
/// - `GET /api/comparison-log/counts` - Counts per company and status
pub fn benchmark_router() -> Router<BenchmarkAppState> {
    Router::new()
        .route("/api/records", get(list_records))
        .route("/api/comparison-log", get(list_comparison_log))
        .route("/api/comparison-log/summary", get(comparison_summary))
        .route("/api/comparison-log/trend", get(company_trend))
        .route("/api/comparison-log/counts", get(log_counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryComparisonLog, InMemoryRecordStore};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        benchmark_router().with_state(BenchmarkAppState {
            records: Arc::new(InMemoryRecordStore::new()),
            comparison_log: Arc::new(InMemoryComparisonLog::new()),
        })
    }

    async fn status_of(uri: &str) -> StatusCode {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn empty_stores_list_nothing() {
        assert_eq!(status_of("/api/records").await, StatusCode::OK);
        assert_eq!(status_of("/api/comparison-log?company=Acme").await, StatusCode::OK);
        assert_eq!(status_of("/api/comparison-log/counts").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn summary_rejects_unknown_grouping() {
        assert_eq!(status_of("/api/comparison-log/summary?by=sector").await, StatusCode::OK);
        assert_eq!(
            status_of("/api/comparison-log/summary?by=planet").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn trend_requires_company() {
        assert_eq!(
            status_of("/api/comparison-log/trend?company=%20").await,
            StatusCode::BAD_REQUEST
        );
    }
}

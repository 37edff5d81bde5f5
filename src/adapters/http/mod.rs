//! HTTP adapters - REST API implementations.
//!
//! Each module has its own router and app state; [`app_router`] merges them
//! and applies the shared tower layers.

pub mod assessment;
pub mod benchmark;
mod error;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

pub use assessment::{assessment_router, AssessmentAppState};
pub use benchmark::{benchmark_router, BenchmarkAppState};
pub use error::{ApiError, ErrorResponse};

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            // No cross-origin access unless origins are configured.
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the full application router.
pub fn app_router(
    assessment: AssessmentAppState,
    benchmark: BenchmarkAppState,
    server: &ServerConfig,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(assessment_router().with_state(assessment))
        .merge(benchmark_router().with_state(benchmark))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document::ReportExportService;
    use crate::adapters::memory::{
        InMemoryComparisonLog, InMemoryQuickAssessmentStore, InMemoryRecordStore,
        InMemorySessionStore,
    };
    use crate::adapters::questions::StaticQuestionSource;
    use crate::adapters::webhook::WebhookNotifier;
    use crate::config::Environment;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(server: &ServerConfig) -> Router {
        let records = Arc::new(InMemoryRecordStore::new());
        let comparison_log = Arc::new(InMemoryComparisonLog::new());
        let assessment = AssessmentAppState {
            sessions: Arc::new(InMemorySessionStore::new()),
            records: records.clone(),
            comparison_log: comparison_log.clone(),
            quick_assessments: Arc::new(InMemoryQuickAssessmentStore::new()),
            questions: Arc::new(StaticQuestionSource::bundled().unwrap()),
            exporter: Arc::new(ReportExportService::new()),
            notifier: Arc::new(WebhookNotifier::new(2).unwrap()),
        };
        let benchmark = BenchmarkAppState {
            records,
            comparison_log,
        };
        app_router(assessment, benchmark, server)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn both_modules_are_merged() {
        let router = app(&ServerConfig::default());

        let questions = router
            .clone()
            .oneshot(Request::builder().uri("/api/questions").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let records = router
            .oneshot(Request::builder().uri("/api/records").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(questions.status(), StatusCode::OK);
        assert_eq!(records.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let server = ServerConfig {
            environment: Environment::Production,
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };

        let response = app(&server)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

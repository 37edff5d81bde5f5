//! Integration tests for the HTTP API.
//!
//! These tests drive the full router with in-memory adapters:
//! 1. Start, score, aggregate and compare an assessment
//! 2. Recommendations and exports for the scored assessment
//! 3. Consent-driven benchmark records and the comparison log
//! 4. Error statuses for invalid input

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use scor_readiness::adapters::document::ReportExportService;
use scor_readiness::adapters::http::{app_router, AssessmentAppState, BenchmarkAppState};
use scor_readiness::adapters::memory::{
    InMemoryComparisonLog, InMemoryQuickAssessmentStore, InMemoryRecordStore,
    InMemorySessionStore,
};
use scor_readiness::adapters::questions::StaticQuestionSource;
use scor_readiness::adapters::webhook::WebhookNotifier;
use scor_readiness::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
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
    app_router(assessment, benchmark, &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn start(app: &Router, company: &str, consent: bool) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/assessments",
        Some(json!({
            "name": "Dana",
            "company": company,
            "sector": "Manufacturing",
            "country": "Kenya",
            "consent": consent
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

fn ratings() -> Value {
    json!({
        "ratings": {
            "plan": [4, 5, 3],
            "source": [2, 2, 3],
            "make": [5, 5, 5],
            "deliver": [1, 2, 1],
            "return": [3, 3, 3]
        },
        "iot_ratings": [3, 3, 4, 4],
        "notes": "  pilot site only  "
    })
}

async fn scored(app: &Router, consent: bool) -> String {
    let id = start(app, "Acme", consent).await;
    let (status, _) = send(
        app,
        Method::PUT,
        &format!("/api/assessments/{}/ratings", id),
        Some(ratings()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    id
}

fn category<'a>(scores: &'a Value, key: &str) -> &'a Value {
    scores["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["category"] == key)
        .unwrap()
}

// =============================================================================
// Assessment Flow
// =============================================================================

#[tokio::test]
async fn ratings_are_scored_tiered_and_grouped() {
    let app = app();
    let id = start(&app, "Acme", false).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/assessments/{}/ratings", id),
        Some(ratings()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("record_id").is_none());
    let scores = &body["assessment"]["scores"];
    assert_eq!(category(scores, "plan")["average"], 4.0);
    assert_eq!(category(scores, "plan")["tier"], "strong");
    assert_eq!(category(scores, "source")["average"], 2.33);
    assert_eq!(category(scores, "source")["tier"], "weak");
    assert_eq!(category(scores, "return")["tier"], "moderate");
    assert_eq!(scores["swot"]["strengths"], json!(["Plan", "Make"]));
    assert_eq!(scores["swot"]["weaknesses"], json!(["Source", "Deliver"]));
    assert_eq!(scores["swot"]["opportunities"], json!(["Return"]));
    assert_eq!(scores["iot"]["average"], 3.5);
    assert_eq!(scores["notes"], "pilot site only");
}

#[tokio::test]
async fn strategy_uses_submitted_factors() {
    let app = app();
    let id = scored(&app, false).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/assessments/{}/strategy", id),
        Some(json!({
            "threats": ["Port congestion", "  "],
            "internal": [
                {"label": "Planning discipline", "weight": 0.3, "rating": 4},
                {"label": "Supplier base", "weight": 0.2, "rating": 2}
            ],
            "external": [
                {"label": "Digital adoption", "weight": 0.5, "rating": 4}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let strategy = &body["strategy"];
    assert_eq!(strategy["ife"], 1.6);
    assert_eq!(strategy["efe"], 2.0);
    assert_eq!(strategy["posture"], "Survival Strategy");
    assert_eq!(strategy["ie_strategy"], "Harvest/Exit");
    assert_eq!(body["threats"], json!(["Port congestion"]));
}

#[tokio::test]
async fn strategy_requires_scores() {
    let app = app();
    let id = start(&app, "Acme", false).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/assessments/{}/strategy", id),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ASSESSMENT_NOT_SCORED");
}

#[tokio::test]
async fn competitive_profile_ranks_entities() {
    let app = app();
    let id = scored(&app, false).await;
    let weights = json!({"plan": 0.2, "source": 0.2, "make": 0.2, "deliver": 0.2, "return": 0.2});

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/assessments/{}/competitive", id),
        Some(json!({
            "weights": weights,
            "entities": [
                {"name": "Rival", "ratings": {"plan": 3.0, "source": 3.0, "make": 3.0, "deliver": 3.0, "return": 3.0}},
                {"name": "Acme", "ratings": {"plan": 5.0, "source": 5.0, "make": 5.0, "deliver": 5.0, "return": 5.0}},
                {"name": "Other", "ratings": {"plan": 2.0, "source": 4.0, "make": 1.0, "deliver": 2.0, "return": 3.0}}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ranked = body["competitive"].as_array().unwrap();
    assert_eq!(ranked[0]["name"], "Acme");
    assert_eq!(ranked[0]["score"], 5.0);
    assert_eq!(ranked[0]["rank"], 1);
    assert_eq!(ranked[0]["band"], "strong");

    let (status, recs) = send(
        &app,
        Method::GET,
        &format!("/api/assessments/{}/recommendations", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(recs["leader_message"].is_string());
    assert_eq!(recs["competitive"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn weights_outside_tolerance_halt_comparison() {
    let app = app();
    let id = scored(&app, false).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/assessments/{}/competitive", id),
        Some(json!({
            "weights": {"plan": 0.5, "source": 0.5, "make": 0.5, "deliver": 0.5, "return": 0.5},
            "entities": [
                {"name": "Acme", "ratings": {"plan": 5.0, "source": 5.0, "make": 5.0, "deliver": 5.0, "return": 5.0}}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "WEIGHT_SUM");

    let (_, state) = send(&app, Method::GET, &format!("/api/assessments/{}", id), None).await;
    assert!(state["competitive"].as_array().unwrap().is_empty());
}

// =============================================================================
// Recommendations and Exports
// =============================================================================

#[tokio::test]
async fn recommendations_cover_every_category() {
    let app = app();
    let id = scored(&app, false).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/assessments/{}/recommendations", id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 5);
    assert!(body["iot"].is_string());
    assert!(body["leader_message"].is_null());
}

#[tokio::test]
async fn json_export_is_an_attachment() {
    let app = app();
    let id = scored(&app, false).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/assessments/{}/export/json", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename="));
    assert!(disposition.contains(".json"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload["respondent"]["company"], "Acme");
}

#[tokio::test]
async fn markdown_export_contains_company() {
    let app = app();
    let id = scored(&app, false).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/assessments/{}/export/markdown", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let markdown = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(markdown.contains("Acme"));
}

#[tokio::test]
async fn unknown_export_format_is_rejected() {
    let app = app();
    let id = scored(&app, false).await;

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/assessments/{}/export/docx", id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Benchmark Records and Comparison Log
// =============================================================================

#[tokio::test]
async fn consented_scoring_stores_a_record() {
    let app = app();
    let id = start(&app, "Acme", true).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/assessments/{}/ratings", id),
        Some(ratings()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["record_id"].is_string());

    let _ = scored(&app, false).await;

    let (status, records) = send(&app, Method::GET, "/api/records?company=Acme", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records["total"], 1);
    assert_eq!(records["items"][0]["scores"]["plan"], 4.0);
    assert_eq!(records["items"][0]["sector"], "Manufacturing");
}

#[tokio::test]
async fn unreachable_webhook_is_logged_as_error() {
    let app = app();
    let id = scored(&app, false).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/assessments/{}/dispatch", id),
        Some(json!({"url": "http://127.0.0.1:9/hook"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert!(body["error"].is_string());

    let (_, log) = send(&app, Method::GET, "/api/comparison-log", None).await;
    assert_eq!(log["total"], 1);
    assert_eq!(log["items"][0]["company"], "Acme");
    assert_eq!(log["items"][0]["iot_average"], 3.5);

    let (_, counts) = send(&app, Method::GET, "/api/comparison-log/counts", None).await;
    assert_eq!(counts["total"], 1);
    assert_eq!(counts["by_status"], json!([["error", 1]]));
}

#[tokio::test]
async fn trend_requires_company() {
    let app = app();

    let (status, _) = send(&app, Method::GET, "/api/comparison-log/trend?company=%20", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Input Validation
// =============================================================================

#[tokio::test]
async fn rating_out_of_range_is_bad_request() {
    let app = app();
    let id = start(&app, "Acme", false).await;
    let mut body = ratings();
    body["ratings"]["make"] = json!([5, 6, 5]);

    let (status, error) = send(
        &app,
        Method::PUT,
        &format!("/api/assessments/{}/ratings", id),
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn empty_category_is_unprocessable() {
    let app = app();
    let id = start(&app, "Acme", false).await;
    let mut body = ratings();
    body["ratings"]["deliver"] = json!([]);

    let (status, error) = send(
        &app,
        Method::PUT,
        &format!("/api/assessments/{}/ratings", id),
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "EMPTY_CATEGORY");
}

#[tokio::test]
async fn blank_company_cannot_start() {
    let app = app();

    let (status, error) = send(
        &app,
        Method::POST,
        "/api/assessments",
        Some(json!({"name": "Dana", "company": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "EMPTY_FIELD");
}

#[tokio::test]
async fn quick_assessment_reports_total() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quick-assessments",
        Some(json!({
            "company": "Acme",
            "sliders": {"plan": 100, "source": 0, "make": 50, "deliver": 80, "return": 20}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 50.0);
    assert_eq!(category(&body, "plan")["tier"], "strong");
    assert_eq!(category(&body, "source")["tier"], "weak");
}

#[tokio::test]
async fn named_quick_assessments_are_listed() {
    let app = app();
    let sliders = json!({"plan": 70, "source": 70, "make": 70, "deliver": 70, "return": 70});

    for company in ["Acme", "  "] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/quick-assessments",
            Some(json!({"company": company, "sliders": sliders})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 70.0);
    }

    let (status, list) = send(&app, Method::GET, "/api/quick-assessments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
    assert_eq!(list["items"][0]["company"], "Acme");
    assert_eq!(list["items"][0]["sliders"]["return"], 70);
    assert_eq!(list["items"][0]["total"], 70.0);
}

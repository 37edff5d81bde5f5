#![forbid(unsafe_code)]

use std::sync::Arc;

use scor_readiness::adapters::document::ReportExportService;
use scor_readiness::adapters::http::{app_router, AssessmentAppState, BenchmarkAppState};
use scor_readiness::adapters::memory::{
    InMemoryComparisonLog, InMemoryQuickAssessmentStore, InMemoryRecordStore,
    InMemorySessionStore,
};
use scor_readiness::adapters::postgres::{
    PostgresComparisonLog, PostgresQuickAssessmentStore, PostgresRecordStore,
};
use scor_readiness::adapters::questions::{StaticQuestionSource, YamlQuestionSource};
use scor_readiness::adapters::spreadsheet::{
    SpreadsheetComparisonLog, SpreadsheetQuestionSource, SpreadsheetQuickAssessmentStore,
    SpreadsheetRecordStore,
};
use scor_readiness::adapters::webhook::WebhookNotifier;
use scor_readiness::config::{AppConfig, StorageBackend};
use scor_readiness::ports::{
    AssessmentRecordStore, ComparisonLogStore, QuestionSource, QuickAssessmentStore,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StartupResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

struct Stores {
    records: Arc<dyn AssessmentRecordStore>,
    comparison_log: Arc<dyn ComparisonLogStore>,
    quick_assessments: Arc<dyn QuickAssessmentStore>,
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

async fn build_stores(config: &AppConfig) -> StartupResult<Stores> {
    match config.storage.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; records are lost on restart");
            Ok(Stores {
                records: Arc::new(InMemoryRecordStore::new()),
                comparison_log: Arc::new(InMemoryComparisonLog::new()),
                quick_assessments: Arc::new(InMemoryQuickAssessmentStore::new()),
            })
        }
        StorageBackend::Spreadsheet => {
            tokio::fs::create_dir_all(&config.storage.data_dir).await?;
            let records = config.storage.records_path();
            let log = config.storage.comparison_log_path();
            let quick = config.storage.quick_assessments_path();
            info!(
                records = %records.display(),
                comparison_log = %log.display(),
                quick_assessments = %quick.display(),
                "Using spreadsheet storage"
            );
            Ok(Stores {
                records: Arc::new(SpreadsheetRecordStore::new(records)),
                comparison_log: Arc::new(SpreadsheetComparisonLog::new(log)),
                quick_assessments: Arc::new(SpreadsheetQuickAssessmentStore::new(quick)),
            })
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or("storage.backend is postgres but database.url is not set")?;
            let pool = database.pool_options().connect(&database.url).await?;
            if database.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
                info!("Database migrations applied");
            }
            info!("Using PostgreSQL storage");
            Ok(Stores {
                records: Arc::new(PostgresRecordStore::new(pool.clone())),
                comparison_log: Arc::new(PostgresComparisonLog::new(pool.clone())),
                quick_assessments: Arc::new(PostgresQuickAssessmentStore::new(pool)),
            })
        }
    }
}

fn build_question_source(config: &AppConfig) -> StartupResult<Arc<dyn QuestionSource>> {
    let Some(path) = config.storage.questions_path() else {
        return Ok(Arc::new(StaticQuestionSource::bundled()?) as Arc<dyn QuestionSource>);
    };
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("xlsx") => Ok(Arc::new(SpreadsheetQuestionSource::new(path)) as Arc<dyn QuestionSource>),
        Some("yaml") | Some("yml") => Ok(Arc::new(YamlQuestionSource::new(&path)) as Arc<dyn QuestionSource>),
        _ => Err(format!("unsupported question file: {}", path.display()).into()),
    }
}

async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> StartupResult<()> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let Stores {
        records,
        comparison_log,
        quick_assessments,
    } = build_stores(&config).await?;
    let questions = build_question_source(&config)?;
    let bank = questions.load().await?;
    info!(total = bank.total(), "Question bank ready");

    let mut exporter =
        ReportExportService::new().with_pdf_timeout(config.export.pdf_timeout_secs);
    if let Some(pandoc) = &config.export.pandoc_path {
        exporter = exporter.with_pandoc_path(pandoc.clone());
    }

    let mut notifier = WebhookNotifier::new(config.webhook.timeout_secs)?;
    if let Some(secret) = &config.webhook.signing_secret {
        notifier = notifier.with_signing_secret(secret.clone());
    }

    let assessment = AssessmentAppState {
        sessions: Arc::new(InMemorySessionStore::new()),
        records: records.clone(),
        comparison_log: comparison_log.clone(),
        quick_assessments,
        questions,
        exporter: Arc::new(exporter),
        notifier: Arc::new(notifier),
    };
    let benchmark = BenchmarkAppState {
        records,
        comparison_log,
    };
    let app = app_router(assessment, benchmark, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        "SCOR readiness server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

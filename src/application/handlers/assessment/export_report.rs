//! ExportReportHandler - Renders a scored assessment in a requested format.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::report::AssessmentReport;
use crate::ports::{AssessmentSessionStore, ExportFormat, ExportedDocument, ReportExporter};

use super::load_scored;

#[derive(Debug, Clone)]
pub struct ExportReportQuery {
    pub assessment_id: AssessmentId,
    pub format: ExportFormat,
}

pub struct ExportReportHandler {
    sessions: Arc<dyn AssessmentSessionStore>,
    exporter: Arc<dyn ReportExporter>,
}

impl ExportReportHandler {
    pub fn new(sessions: Arc<dyn AssessmentSessionStore>, exporter: Arc<dyn ReportExporter>) -> Self {
        Self { sessions, exporter }
    }

    pub async fn handle(&self, query: ExportReportQuery) -> Result<ExportedDocument, DomainError> {
        let state = load_scored(self.sessions.as_ref(), &query.assessment_id).await?;
        let report = AssessmentReport::build(&state)?;
        let document = self.exporter.export(&report, query.format).await?;

        info!(
            assessment_id = %state.id,
            format = %query.format,
            bytes = document.content.len(),
            "Report exported"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document::ReportExportService;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::application::handlers::assessment::fixtures;
    use crate::domain::foundation::ErrorCode;

    fn handler(sessions: Arc<InMemorySessionStore>) -> ExportReportHandler {
        ExportReportHandler::new(sessions, Arc::new(ReportExportService::new()))
    }

    #[tokio::test]
    async fn exports_json_payload() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let scored = fixtures::scored(&sessions, false).await;

        let doc = handler(sessions)
            .handle(ExportReportQuery {
                assessment_id: scored.id,
                format: ExportFormat::Json,
            })
            .await
            .unwrap();

        assert_eq!(doc.content_type, "application/json");
        let payload: serde_json::Value = serde_json::from_slice(&doc.content).unwrap();
        assert_eq!(payload["respondent"]["company"], "Acme");
        assert_eq!(payload["categories"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn exports_markdown() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let scored = fixtures::scored(&sessions, false).await;

        let doc = handler(sessions)
            .handle(ExportReportQuery {
                assessment_id: scored.id,
                format: ExportFormat::Markdown,
            })
            .await
            .unwrap();

        let text = String::from_utf8(doc.content).unwrap();
        assert!(text.contains("Acme"));
        assert!(doc.filename.ends_with(".md"));
    }

    #[tokio::test]
    async fn unscored_assessment_cannot_be_exported() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let started = fixtures::started(&sessions, false).await;

        let err = handler(sessions)
            .handle(ExportReportQuery {
                assessment_id: started.id,
                format: ExportFormat::Json,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotScored);
    }
}

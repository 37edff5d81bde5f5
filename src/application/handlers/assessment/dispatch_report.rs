//! DispatchReportHandler - Delivers the report to a webhook and logs the attempt.
//!
//! Every attempt is appended to the comparison log with its outcome:
//! `Success` for an HTTP 200, `Failure` for any other status and `Error`
//! when the request could not be completed. A failed delivery is not an
//! error for the caller; only a failure to write the log row is.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::benchmark::{ComparisonLogEntry, DispatchMethod, DispatchStatus};
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::report::AssessmentReport;
use crate::ports::{dispatch_status, AssessmentSessionStore, ComparisonLogStore, ReportNotifier};

use super::load_scored;

#[derive(Debug, Clone)]
pub struct DispatchReportCommand {
    pub assessment_id: AssessmentId,
    pub target_url: String,
}

#[derive(Debug, Clone)]
pub struct DispatchResult {
    pub status: DispatchStatus,
    /// HTTP status returned by the target, when it answered.
    pub status_code: Option<u16>,
    /// Transport or validation error, when it did not.
    pub error: Option<String>,
    pub entry: ComparisonLogEntry,
}

pub struct DispatchReportHandler {
    sessions: Arc<dyn AssessmentSessionStore>,
    notifier: Arc<dyn ReportNotifier>,
    log: Arc<dyn ComparisonLogStore>,
}

impl DispatchReportHandler {
    pub fn new(
        sessions: Arc<dyn AssessmentSessionStore>,
        notifier: Arc<dyn ReportNotifier>,
        log: Arc<dyn ComparisonLogStore>,
    ) -> Self {
        Self {
            sessions,
            notifier,
            log,
        }
    }

    pub async fn handle(&self, cmd: DispatchReportCommand) -> Result<DispatchResult, DomainError> {
        let state = load_scored(self.sessions.as_ref(), &cmd.assessment_id).await?;
        let report = AssessmentReport::build(&state)?;

        let outcome = self.notifier.deliver(cmd.target_url.trim(), &report).await;
        let status = dispatch_status(&outcome);
        let (status_code, error) = match &outcome {
            Ok(receipt) => (Some(receipt.status_code), None),
            Err(e) => {
                warn!(assessment_id = %state.id, error = %e, "Report delivery did not complete");
                (None, Some(e.to_string()))
            }
        };

        let entry = ComparisonLogEntry::from_state(&state, status, DispatchMethod::Webhook);
        self.log.append(&entry).await?;

        info!(
            assessment_id = %state.id,
            status = %status,
            status_code = status_code.unwrap_or_default(),
            "Report dispatched"
        );
        Ok(DispatchResult {
            status,
            status_code,
            error,
            entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryComparisonLog, InMemorySessionStore};
    use crate::application::handlers::assessment::fixtures;
    use crate::domain::benchmark::LogFilter;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::{DeliveryReceipt, NotifyError};
    use async_trait::async_trait;

    /// Answers every delivery with a fixed outcome.
    struct FixedNotifier(Result<u16, NotifyError>);

    #[async_trait]
    impl ReportNotifier for FixedNotifier {
        async fn deliver(
            &self,
            _target_url: &str,
            _report: &AssessmentReport,
        ) -> Result<DeliveryReceipt, NotifyError> {
            self.0
                .clone()
                .map(|status_code| DeliveryReceipt { status_code })
        }
    }

    async fn dispatch(outcome: Result<u16, NotifyError>) -> (DispatchResult, Arc<InMemoryComparisonLog>) {
        let sessions = Arc::new(InMemorySessionStore::new());
        let log = Arc::new(InMemoryComparisonLog::new());
        let scored = fixtures::scored(&sessions, true).await;
        let handler = DispatchReportHandler::new(sessions, Arc::new(FixedNotifier(outcome)), log.clone());

        let result = handler
            .handle(DispatchReportCommand {
                assessment_id: scored.id,
                target_url: "http://localhost/hook".into(),
            })
            .await
            .unwrap();
        (result, log)
    }

    #[tokio::test]
    async fn ok_response_logs_success() {
        let (result, log) = dispatch(Ok(200)).await;

        assert_eq!(result.status, DispatchStatus::Success);
        assert_eq!(result.status_code, Some(200));
        let rows = log.list(&LogFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, DispatchStatus::Success);
        assert_eq!(rows[0].method, DispatchMethod::Webhook);
        assert_eq!(rows[0].company, "Acme");
        assert_eq!(rows[0].iot_average, 3.5);
        assert_eq!(rows[0].cpm_score, 0.0);
    }

    #[tokio::test]
    async fn other_status_logs_failure() {
        let (result, log) = dispatch(Ok(500)).await;

        assert_eq!(result.status, DispatchStatus::Failure);
        assert_eq!(result.status_code, Some(500));
        assert_eq!(log.list(&LogFilter::default()).await.unwrap()[0].status, DispatchStatus::Failure);
    }

    #[tokio::test]
    async fn transport_error_logs_error() {
        let (result, log) = dispatch(Err(NotifyError::Transport("connection refused".into()))).await;

        assert_eq!(result.status, DispatchStatus::Error);
        assert!(result.status_code.is_none());
        assert!(result.error.unwrap().contains("connection refused"));
        assert_eq!(log.list(&LogFilter::default()).await.unwrap()[0].status, DispatchStatus::Error);
    }

    #[tokio::test]
    async fn unscored_assessment_is_not_dispatched() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let log = Arc::new(InMemoryComparisonLog::new());
        let started = fixtures::started(&sessions, true).await;
        let handler = DispatchReportHandler::new(sessions, Arc::new(FixedNotifier(Ok(200))), log.clone());

        let err = handler
            .handle(DispatchReportCommand {
                assessment_id: started.id,
                target_url: "http://localhost/hook".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AssessmentNotScored);
        assert!(log.list(&LogFilter::default()).await.unwrap().is_empty());
    }
}

//! Report Notifier Port - Delivers the exported report to an external system.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::benchmark::DispatchStatus;
use crate::domain::report::AssessmentReport;

/// Transport-level delivery failure (no HTTP response was received).
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("Failed to serialize payload: {0}")]
    Serialization(String),

    #[error("Delivery failed: {0}")]
    Transport(String),

    #[error("Delivery timed out")]
    Timeout,
}

/// Response received from the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status_code: u16,
}

impl DeliveryReceipt {
    /// Only an exact 200 counts as success.
    pub fn status(&self) -> DispatchStatus {
        if self.status_code == 200 {
            DispatchStatus::Success
        } else {
            DispatchStatus::Failure
        }
    }
}

/// Classifies a delivery attempt for the comparison log.
pub fn dispatch_status(result: &Result<DeliveryReceipt, NotifyError>) -> DispatchStatus {
    match result {
        Ok(receipt) => receipt.status(),
        Err(_) => DispatchStatus::Error,
    }
}

/// Port for pushing a report to a caller-supplied endpoint.
#[async_trait]
pub trait ReportNotifier: Send + Sync {
    /// POST `report` as JSON to `target_url`.
    ///
    /// Any HTTP response is returned as a receipt, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` when no response could be obtained.
    async fn deliver(
        &self,
        target_url: &str,
        report: &AssessmentReport,
    ) -> Result<DeliveryReceipt, NotifyError>;
}

//! Assessment Record Store Port - Append-only persistence of completed
//! assessments, shared by the spreadsheet and PostgreSQL adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::benchmark::{ComparisonLogEntry, LogFilter};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the record store and the comparison log.
#[derive(Debug, Clone, Error)]
pub enum RecordStoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Stored row is malformed: {0}")]
    Malformed(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<RecordStoreError> for DomainError {
    fn from(err: RecordStoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for the benchmark record table.
///
/// Records are never updated or deleted.
#[async_trait]
pub trait AssessmentRecordStore: Send + Sync {
    /// Append one record.
    async fn append(&self, record: &AssessmentRecord) -> Result<(), RecordStoreError>;

    /// All records matching `filter`, in insertion order.
    async fn list(&self, filter: &LogFilter) -> Result<Vec<AssessmentRecord>, RecordStoreError>;
}

/// Port for the comparison log written after every dispatch attempt.
#[async_trait]
pub trait ComparisonLogStore: Send + Sync {
    /// Append one log row.
    async fn append(&self, entry: &ComparisonLogEntry) -> Result<(), RecordStoreError>;

    /// All rows matching `filter`, in insertion order.
    async fn list(&self, filter: &LogFilter) -> Result<Vec<ComparisonLogEntry>, RecordStoreError>;
}

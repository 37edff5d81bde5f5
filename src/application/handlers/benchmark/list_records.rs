//! ListRecordsHandler - Stored assessment records matching a filter.

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::benchmark::LogFilter;
use crate::domain::foundation::DomainError;
use crate::ports::AssessmentRecordStore;

pub struct ListRecordsHandler {
    records: Arc<dyn AssessmentRecordStore>,
}

impl ListRecordsHandler {
    pub fn new(records: Arc<dyn AssessmentRecordStore>) -> Self {
        Self { records }
    }

    pub async fn handle(&self, filter: LogFilter) -> Result<Vec<AssessmentRecord>, DomainError> {
        let records = self.records.list(&filter).await?;
        debug!(count = records.len(), "Records listed");
        Ok(records)
    }
}

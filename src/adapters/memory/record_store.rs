//! In-memory record table, comparison log and quick assessment table, for
//! tests and the `memory` storage backend.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{AssessmentRecord, QuickAssessmentRecord};
use crate::domain::benchmark::{ComparisonLogEntry, LogFilter};
use crate::ports::{
    AssessmentRecordStore, ComparisonLogStore, QuickAssessmentStore, RecordStoreError,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<AssessmentRecord>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssessmentRecordStore for InMemoryRecordStore {
    async fn append(&self, record: &AssessmentRecord) -> Result<(), RecordStoreError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn list(&self, filter: &LogFilter) -> Result<Vec<AssessmentRecord>, RecordStoreError> {
        Ok(filter.apply(&self.records.read().await))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryComparisonLog {
    entries: Arc<RwLock<Vec<ComparisonLogEntry>>>,
}

impl InMemoryComparisonLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComparisonLogStore for InMemoryComparisonLog {
    async fn append(&self, entry: &ComparisonLogEntry) -> Result<(), RecordStoreError> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn list(&self, filter: &LogFilter) -> Result<Vec<ComparisonLogEntry>, RecordStoreError> {
        Ok(filter.apply(&self.entries.read().await))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuickAssessmentStore {
    records: Arc<RwLock<Vec<QuickAssessmentRecord>>>,
}

impl InMemoryQuickAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuickAssessmentStore for InMemoryQuickAssessmentStore {
    async fn append(&self, record: &QuickAssessmentRecord) -> Result<(), RecordStoreError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<QuickAssessmentRecord>, RecordStoreError> {
        Ok(self.records.read().await.clone())
    }
}

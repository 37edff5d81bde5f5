//! Quick Assessment Store Port - Append-only table of named quick results.

use async_trait::async_trait;

use crate::domain::assessment::QuickAssessmentRecord;

use super::RecordStoreError;

/// Port for stored quick assessments.
///
/// Rows are never updated or deleted.
#[async_trait]
pub trait QuickAssessmentStore: Send + Sync {
    /// Append one result.
    async fn append(&self, record: &QuickAssessmentRecord) -> Result<(), RecordStoreError>;

    /// All stored results in insertion order.
    async fn list(&self) -> Result<Vec<QuickAssessmentRecord>, RecordStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_object_safe() {
        fn store<T: QuickAssessmentStore + ?Sized>() {}
        store::<dyn QuickAssessmentStore>();
    }
}

//! PostgreSQL adapters - Database implementations for the append-only ports.
//!
//! - `PostgresRecordStore` - Benchmark records (`assessment_records`)
//! - `PostgresComparisonLog` - Dispatch log (`comparison_log`)
//! - `PostgresQuickAssessmentStore` - Named quick results (`quick_assessments`)
//!
//! Schema lives in `migrations/` and is applied at startup.

mod quick_store;
mod record_store;

pub use quick_store::PostgresQuickAssessmentStore;
pub use record_store::{PostgresComparisonLog, PostgresRecordStore};

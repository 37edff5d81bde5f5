//! In-Memory Adapters
//!
//! Process-local implementations of the storage ports, used by tests and by
//! the `memory` storage backend.

mod record_store;
mod session_store;

pub use record_store::{InMemoryComparisonLog, InMemoryQuickAssessmentStore, InMemoryRecordStore};
pub use session_store::InMemorySessionStore;

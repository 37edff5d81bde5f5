//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `AssessmentSessionStore` - In-progress assessment state keyed by id
//! - `AssessmentRecordStore` - Append-only benchmark records (consented)
//! - `ComparisonLogStore` - One row per report dispatch attempt
//! - `QuickAssessmentStore` - Named quick slider results
//! - `QuestionSource` - Question bank loader
//!
//! ## Output Ports
//!
//! - `ReportExporter` - JSON, XLSX, Markdown, HTML and PDF rendering
//! - `ReportNotifier` - Webhook delivery of the report payload

mod assessment_record_store;
mod assessment_session_store;
mod question_source;
mod quick_assessment_store;
mod report_exporter;
mod report_notifier;

pub use assessment_record_store::{AssessmentRecordStore, ComparisonLogStore, RecordStoreError};
pub use assessment_session_store::{AssessmentSessionStore, SessionStoreError};
pub use question_source::{QuestionSource, QuestionSourceError};
pub use quick_assessment_store::QuickAssessmentStore;
pub use report_exporter::{ExportError, ExportFormat, ExportedDocument, ReportExporter};
pub use report_notifier::{dispatch_status, DeliveryReceipt, NotifyError, ReportNotifier};

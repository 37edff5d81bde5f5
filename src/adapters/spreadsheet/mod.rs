//! Spreadsheet Adapters
//!
//! xlsx-backed implementations using `umya-spreadsheet`.
//!
//! ## Available Adapters
//!
//! - **SpreadsheetRecordStore** - Benchmark records (`benchmark_data.xlsx`)
//! - **SpreadsheetComparisonLog** - Dispatch log (`data_log.xlsx`)
//! - **SpreadsheetQuickAssessmentStore** - Named quick results (`quick_assessments.xlsx`)
//! - **SpreadsheetQuestionSource** - Question bank (`SCOR_AI_Questions.xlsx`)
//!
//! `report_workbook` renders the multi-sheet export used by the document
//! export service.

mod comparison_log;
mod question_loader;
mod quick_store;
mod record_store;
pub mod report_workbook;
pub mod table;

pub use comparison_log::SpreadsheetComparisonLog;
pub use question_loader::SpreadsheetQuestionSource;
pub use quick_store::SpreadsheetQuickAssessmentStore;
pub use record_store::SpreadsheetRecordStore;

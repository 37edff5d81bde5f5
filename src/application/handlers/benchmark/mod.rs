//! Benchmark queries over stored records and the comparison log.

mod comparison_log;
mod list_records;

pub use comparison_log::{
    CompanyTrendHandler, ComparisonLogHandler, ComparisonSummaryHandler, LogCounts,
    LogCountsHandler,
};
pub use list_records::ListRecordsHandler;

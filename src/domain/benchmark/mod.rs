//! Benchmark Module - Comparison log rows and analytics over stored rows.

mod analytics;
mod entry;

pub use analytics::{GroupAverages, GroupBy, LogAnalytics, LogFilter, TrendPoint};
pub use entry::{ComparisonLogEntry, DispatchMethod, DispatchStatus, RespondentRow};

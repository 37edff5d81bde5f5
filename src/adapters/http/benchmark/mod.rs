//! HTTP adapter for benchmark records and comparison-log analytics.

mod dto;
mod handlers;
mod routes;

pub use dto::{FilterQuery, LogListResponse, RecordListResponse, SummaryResponse, TrendResponse};
pub use handlers::BenchmarkAppState;
pub use routes::benchmark_router;

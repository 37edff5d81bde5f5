//! Comparison log queries: rows, group averages, trend and counts.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::benchmark::{
    ComparisonLogEntry, DispatchStatus, GroupAverages, GroupBy, LogAnalytics, LogFilter, TrendPoint,
};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::ComparisonLogStore;

/// Log rows matching a filter, in append order.
pub struct ComparisonLogHandler {
    log: Arc<dyn ComparisonLogStore>,
}

impl ComparisonLogHandler {
    pub fn new(log: Arc<dyn ComparisonLogStore>) -> Self {
        Self { log }
    }

    pub async fn handle(&self, filter: LogFilter) -> Result<Vec<ComparisonLogEntry>, DomainError> {
        let entries = self.log.list(&filter).await?;
        debug!(count = entries.len(), "Comparison log listed");
        Ok(entries)
    }
}

/// Averages per sector or country over the filtered rows.
pub struct ComparisonSummaryHandler {
    log: Arc<dyn ComparisonLogStore>,
}

impl ComparisonSummaryHandler {
    pub fn new(log: Arc<dyn ComparisonLogStore>) -> Self {
        Self { log }
    }

    pub async fn handle(&self, by: GroupBy, filter: LogFilter) -> Result<Vec<GroupAverages>, DomainError> {
        let entries = self.log.list(&filter).await?;
        Ok(LogAnalytics::group_averages(&entries, by))
    }
}

/// Time-ordered history of one company.
pub struct CompanyTrendHandler {
    log: Arc<dyn ComparisonLogStore>,
}

impl CompanyTrendHandler {
    pub fn new(log: Arc<dyn ComparisonLogStore>) -> Self {
        Self { log }
    }

    pub async fn handle(&self, company: &str) -> Result<Vec<TrendPoint>, DomainError> {
        let company = company.trim();
        if company.is_empty() {
            return Err(ValidationError::empty_field("company").into());
        }
        let entries = self.log.list(&LogFilter::company(company)).await?;
        Ok(LogAnalytics::company_trend(&entries, company))
    }
}

/// Row counts per company and per dispatch status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogCounts {
    pub total: usize,
    pub by_company: Vec<(String, usize)>,
    pub by_status: Vec<(DispatchStatus, usize)>,
}

pub struct LogCountsHandler {
    log: Arc<dyn ComparisonLogStore>,
}

impl LogCountsHandler {
    pub fn new(log: Arc<dyn ComparisonLogStore>) -> Self {
        Self { log }
    }

    pub async fn handle(&self, filter: LogFilter) -> Result<LogCounts, DomainError> {
        let entries = self.log.list(&filter).await?;
        Ok(LogCounts {
            total: entries.len(),
            by_company: LogAnalytics::counts_by_company(&entries),
            by_status: LogAnalytics::counts_by_status(&entries),
        })
    }
}

//! HTTP DTOs for benchmark endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::AssessmentRecord;
use crate::domain::benchmark::{ComparisonLogEntry, GroupAverages, GroupBy, LogFilter, TrendPoint};

/// Optional exact-match filters shared by the list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl From<FilterQuery> for LogFilter {
    fn from(query: FilterQuery) -> Self {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            company: non_blank(query.company),
            sector: non_blank(query.sector),
            country: non_blank(query.country),
        }
    }
}

/// Query for group averages: `by=sector|country` plus filters.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryQuery {
    pub by: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl SummaryQuery {
    pub fn filter(&self) -> LogFilter {
        FilterQuery {
            company: self.company.clone(),
            sector: self.sector.clone(),
            country: self.country.clone(),
        }
        .into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendQuery {
    pub company: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordListResponse {
    pub items: Vec<AssessmentRecord>,
    pub total: usize,
}

impl From<Vec<AssessmentRecord>> for RecordListResponse {
    fn from(items: Vec<AssessmentRecord>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogListResponse {
    pub items: Vec<ComparisonLogEntry>,
    pub total: usize,
}

impl From<Vec<ComparisonLogEntry>> for LogListResponse {
    fn from(items: Vec<ComparisonLogEntry>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub by: GroupBy,
    pub groups: Vec<GroupAverages>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendResponse {
    pub company: String,
    pub points: Vec<TrendPoint>,
}

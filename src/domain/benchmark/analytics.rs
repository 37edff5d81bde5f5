//! Filtering and aggregation over logged rows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::foundation::{CategoryValues, Timestamp, ValidationError};

use super::{ComparisonLogEntry, DispatchStatus, RespondentRow};

/// Optional exact-match filters; `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    pub company: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
}

impl LogFilter {
    pub fn company(company: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            ..Self::default()
        }
    }

    pub fn matches<R: RespondentRow>(&self, row: &R) -> bool {
        fn field_matches(filter: &Option<String>, value: &str) -> bool {
            filter.as_deref().map_or(true, |wanted| wanted == value)
        }
        field_matches(&self.company, row.company())
            && field_matches(&self.sector, row.sector())
            && field_matches(&self.country, row.country())
    }

    /// Rows matching every set filter, in original order.
    pub fn apply<R: RespondentRow + Clone>(&self, rows: &[R]) -> Vec<R> {
        rows.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

/// Column to group log rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    Sector,
    Country,
}

impl GroupBy {
    fn key<'a>(&self, entry: &'a ComparisonLogEntry) -> &'a str {
        match self {
            GroupBy::Sector => &entry.sector,
            GroupBy::Country => &entry.country,
        }
    }
}

impl FromStr for GroupBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sector" => Ok(GroupBy::Sector),
            "country" => Ok(GroupBy::Country),
            other => Err(ValidationError::invalid_format(
                "by",
                format!("expected 'sector' or 'country', got '{}'", other),
            )),
        }
    }
}

/// Mean values of one sector or country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAverages {
    pub key: String,
    pub count: usize,
    pub cpm_average: f64,
    pub iot_average: f64,
    pub scores: CategoryValues<f64>,
}

/// One point of a company's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub logged_at: Timestamp,
    pub cpm_score: f64,
    pub iot_average: f64,
    pub scores: CategoryValues<f64>,
}

/// Aggregations over the comparison log.
pub struct LogAnalytics;

impl LogAnalytics {
    /// Averages per group, ordered by group key.
    ///
    /// Rows with a blank key are skipped.
    pub fn group_averages(entries: &[ComparisonLogEntry], by: GroupBy) -> Vec<GroupAverages> {
        let mut groups: BTreeMap<&str, Vec<&ComparisonLogEntry>> = BTreeMap::new();
        for entry in entries {
            let key = by.key(entry).trim();
            if key.is_empty() {
                continue;
            }
            groups.entry(key).or_default().push(entry);
        }

        groups
            .into_iter()
            .map(|(key, rows)| {
                let n = rows.len() as f64;
                let mean = |f: &dyn Fn(&ComparisonLogEntry) -> f64| {
                    rows.iter().map(|r| f(*r)).sum::<f64>() / n
                };
                GroupAverages {
                    key: key.to_string(),
                    count: rows.len(),
                    cpm_average: mean(&|r| r.cpm_score),
                    iot_average: mean(&|r| r.iot_average),
                    scores: CategoryValues::from_fn(|c| mean(&|r| *r.scores.get(c))),
                }
            })
            .collect()
    }

    /// History of one company ordered by time.
    pub fn company_trend(entries: &[ComparisonLogEntry], company: &str) -> Vec<TrendPoint> {
        let mut points: Vec<TrendPoint> = entries
            .iter()
            .filter(|e| e.company == company)
            .map(|e| TrendPoint {
                logged_at: e.logged_at,
                cpm_score: e.cpm_score,
                iot_average: e.iot_average,
                scores: e.scores,
            })
            .collect();
        points.sort_by_key(|p| p.logged_at);
        points
    }

    /// Rows per company, most frequent first; ties by name.
    pub fn counts_by_company(entries: &[ComparisonLogEntry]) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in entries.iter().filter(|e| !e.company.trim().is_empty()) {
            *counts.entry(entry.company.as_str()).or_default() += 1;
        }
        let mut counts: Vec<(String, usize)> =
            counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Rows per dispatch status, in status order; absent statuses omitted.
    pub fn counts_by_status(entries: &[ComparisonLogEntry]) -> Vec<(DispatchStatus, usize)> {
        let mut counts: BTreeMap<DispatchStatus, usize> = BTreeMap::new();
        for entry in entries {
            *counts.entry(entry.status).or_default() += 1;
        }
        counts.into_iter().collect()
    }
}

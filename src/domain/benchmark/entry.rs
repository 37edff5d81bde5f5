//! Comparison log rows written after each report dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::assessment::{AssessmentRecord, AssessmentState};
use crate::domain::foundation::{round_to, CategoryValues, Timestamp, ValidationError};

/// Outcome of a dispatch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStatus {
    /// Receiver answered 200.
    Success,
    /// Receiver answered with any other status.
    Failure,
    /// The request could not be completed.
    Error,
}

impl DispatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::Success => "success",
            DispatchStatus::Failure => "failure",
            DispatchStatus::Error => "error",
        }
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(DispatchStatus::Success),
            "failure" => Ok(DispatchStatus::Failure),
            "error" => Ok(DispatchStatus::Error),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown dispatch status '{}'", other),
            )),
        }
    }
}

/// Channel the report was sent through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispatchMethod {
    #[default]
    Webhook,
}

impl DispatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchMethod::Webhook => "Webhook",
        }
    }
}

impl fmt::Display for DispatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "webhook" => Ok(DispatchMethod::Webhook),
            other => Err(ValidationError::invalid_format(
                "method",
                format!("unknown dispatch method '{}'", other),
            )),
        }
    }
}

/// One flat row of the comparison log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonLogEntry {
    pub name: String,
    pub company: String,
    pub sector: String,
    pub country: String,
    pub logged_at: Timestamp,
    pub iot_average: f64,
    /// CPM score of the assessed company; 0 when it was not compared.
    pub cpm_score: f64,
    pub status: DispatchStatus,
    pub method: DispatchMethod,
    pub scores: CategoryValues<f64>,
}

impl ComparisonLogEntry {
    /// Builds the row describing one dispatch of `state`.
    pub fn from_state(state: &AssessmentState, status: DispatchStatus, method: DispatchMethod) -> Self {
        let profile = &state.respondent;
        Self {
            name: profile.name.clone(),
            company: profile.company.clone(),
            sector: profile.sector.clone(),
            country: profile.country.clone(),
            logged_at: Timestamp::now(),
            iot_average: state.iot().map(|i| round_to(i.average, 2)).unwrap_or(0.0),
            cpm_score: state.company_cpm_score().unwrap_or(0.0),
            status,
            method,
            scores: state
                .scorecard()
                .map(|card| card.canonical_averages().map(|_, v| round_to(*v, 2)))
                .unwrap_or_default(),
        }
    }
}

/// Identity columns shared by log rows and assessment records.
pub trait RespondentRow {
    fn company(&self) -> &str;
    fn sector(&self) -> &str;
    fn country(&self) -> &str;
}

impl RespondentRow for ComparisonLogEntry {
    fn company(&self) -> &str {
        &self.company
    }
    fn sector(&self) -> &str {
        &self.sector
    }
    fn country(&self) -> &str {
        &self.country
    }
}

impl RespondentRow for AssessmentRecord {
    fn company(&self) -> &str {
        &self.company
    }
    fn sector(&self) -> &str {
        &self.sector
    }
    fn country(&self) -> &str {
        &self.country
    }
}

//! Append-only record of a completed, consented assessment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    round_to, CategoryValues, DomainError, ErrorCode, RecordId, Timestamp,
};

use super::AssessmentState;

/// Persisted summary of one assessment. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: RecordId,
    pub recorded_at: Timestamp,
    pub name: String,
    pub company: String,
    pub sector: String,
    pub country: String,
    /// Category averages on the canonical 1-5 scale, rounded to 2 dp.
    pub scores: CategoryValues<f64>,
    pub iot_average: f64,
    pub notes: String,
    pub consent: bool,
}

impl AssessmentRecord {
    /// Captures a record from a scored state whose respondent consented.
    ///
    /// # Errors
    /// - `AssessmentNotScored` if no ratings were submitted
    /// - `ConsentNotGranted` if the respondent did not opt in
    pub fn capture(state: &AssessmentState) -> Result<Self, DomainError> {
        let scored = state.scored.as_ref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::AssessmentNotScored,
                "Assessment has no submitted ratings",
            )
        })?;
        if !state.respondent.consent {
            return Err(DomainError::new(
                ErrorCode::ConsentNotGranted,
                "Respondent did not consent to storing results",
            ));
        }

        let profile = &state.respondent;
        Ok(Self {
            id: RecordId::new(),
            recorded_at: Timestamp::now(),
            name: profile.name.clone(),
            company: profile.company.clone(),
            sector: profile.sector.clone(),
            country: profile.country.clone(),
            scores: scored
                .scorecard
                .canonical_averages()
                .map(|_, avg| round_to(*avg, 2)),
            iot_average: round_to(scored.iot.average, 2),
            notes: scored.notes.clone(),
            consent: true,
        })
    }
}

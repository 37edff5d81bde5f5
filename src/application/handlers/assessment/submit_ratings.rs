//! SubmitRatingsHandler - Scores a ratings submission and stores the result.
//!
//! Ratings are validated here (1-5, one per question of the loaded bank)
//! before being handed to the scoring engine. When the respondent consented,
//! an `AssessmentRecord` is appended before the new state is stored.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::assessment::{AssessmentRecord, AssessmentState};
use crate::domain::foundation::{
    AssessmentId, CategoryValues, DomainError, LikertRating, RatingScale, RecordId,
};
use crate::domain::scoring::{IotReadiness, ScoringEngine, IOT_QUESTION_COUNT};
use crate::ports::{AssessmentRecordStore, AssessmentSessionStore, QuestionSource};

#[derive(Debug, Clone)]
pub struct SubmitRatingsCommand {
    pub assessment_id: AssessmentId,
    /// One rating per question, in question order, per category.
    pub ratings: CategoryValues<Vec<u8>>,
    /// Answers to the IoT block; neutral answers when omitted.
    pub iot_ratings: Option<Vec<u8>>,
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct SubmitRatingsResult {
    pub state: AssessmentState,
    /// Id of the stored benchmark record, when consent was given.
    pub record_id: Option<RecordId>,
}

pub struct SubmitRatingsHandler {
    sessions: Arc<dyn AssessmentSessionStore>,
    records: Arc<dyn AssessmentRecordStore>,
    questions: Arc<dyn QuestionSource>,
}

impl SubmitRatingsHandler {
    pub fn new(
        sessions: Arc<dyn AssessmentSessionStore>,
        records: Arc<dyn AssessmentRecordStore>,
        questions: Arc<dyn QuestionSource>,
    ) -> Self {
        Self {
            sessions,
            records,
            questions,
        }
    }

    pub async fn handle(&self, cmd: SubmitRatingsCommand) -> Result<SubmitRatingsResult, DomainError> {
        let state = self.sessions.get(&cmd.assessment_id).await?;
        let bank = self.questions.load().await?;

        for ((category, expected), (_, given)) in bank.counts().iter().zip(cmd.ratings.iter()) {
            // An empty list is left to the engine, which reports it as EmptyCategory.
            if !given.is_empty() && given.len() != *expected {
                return Err(DomainError::validation(
                    format!("ratings.{}", category.display_name().to_lowercase()),
                    format!("expected {} ratings, got {}", expected, given.len()),
                ));
            }
            validate_likert(given)?;
        }

        let iot = match &cmd.iot_ratings {
            None => IotReadiness::default(),
            Some(values) => {
                let answers: [u8; IOT_QUESTION_COUNT] = values.as_slice().try_into().map_err(|_| {
                    DomainError::validation(
                        "iot_ratings",
                        format!("expected {} ratings, got {}", IOT_QUESTION_COUNT, values.len()),
                    )
                })?;
                validate_likert(&answers)?;
                IotReadiness::from_ratings(answers)
            }
        };

        let scorecard = ScoringEngine::score(&cmd.ratings, RatingScale::Likert)?;
        let next = state.with_scores(scorecard, iot, cmd.notes.trim());

        let record_id = if next.respondent.consent {
            let record = AssessmentRecord::capture(&next)?;
            self.records.append(&record).await?;
            debug!(record_id = %record.id, "Benchmark record stored");
            Some(record.id)
        } else {
            None
        };

        self.sessions.put(&next).await?;

        info!(
            assessment_id = %next.id,
            overall = next.scorecard().map(|c| c.overall()).unwrap_or_default(),
            iot_average = iot.average,
            stored = record_id.is_some(),
            "Ratings scored"
        );
        Ok(SubmitRatingsResult {
            state: next,
            record_id,
        })
    }
}

fn validate_likert(values: &[u8]) -> Result<(), DomainError> {
    for value in values {
        LikertRating::try_new(*value)?;
    }
    Ok(())
}

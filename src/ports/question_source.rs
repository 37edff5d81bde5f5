//! Question Source Port - Loads the question bank.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::questions::{QuestionBank, QuestionBankError};

#[derive(Debug, Clone, Error)]
pub enum QuestionSourceError {
    #[error("Failed to read question source: {0}")]
    Io(String),

    #[error("Question source is malformed: {0}")]
    Malformed(String),

    #[error(transparent)]
    Bank(#[from] QuestionBankError),
}

impl From<QuestionSourceError> for DomainError {
    fn from(err: QuestionSourceError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for loading questions from a spreadsheet, YAML file or fixture.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load and group all questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError::Bank` when a category has no questions.
    async fn load(&self) -> Result<QuestionBank, QuestionSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ScorCategory;

    #[test]
    fn bank_error_is_transparent() {
        let err: QuestionSourceError = QuestionBankError::MissingCategory {
            category: ScorCategory::Deliver,
        }
        .into();
        assert_eq!(err.to_string(), "No questions defined for category 'Deliver'");
    }
}

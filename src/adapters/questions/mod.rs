//! Question Source Adapters
//!
//! - **YamlQuestionSource** - Question bank from a YAML file
//! - **StaticQuestionSource** - A fixed, already-loaded bank (bundled default
//!   and tests)
//!
//! The spreadsheet loader lives in `adapters::spreadsheet`.

mod yaml_source;

use async_trait::async_trait;

use crate::domain::questions::QuestionBank;
use crate::ports::{QuestionSource, QuestionSourceError};

pub use yaml_source::{parse_questions, YamlQuestionSource, BUNDLED_QUESTIONS};

#[derive(Debug, Clone)]
pub struct StaticQuestionSource {
    bank: QuestionBank,
}

impl StaticQuestionSource {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    /// The question bank compiled into the binary.
    pub fn bundled() -> Result<Self, QuestionSourceError> {
        parse_questions(BUNDLED_QUESTIONS).map(Self::new)
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn load(&self) -> Result<QuestionBank, QuestionSourceError> {
        Ok(self.bank.clone())
    }
}

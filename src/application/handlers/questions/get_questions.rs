//! GetQuestionsHandler - The questionnaire a respondent answers.
//!
//! Category questions come from the configured source; the IoT block and the
//! quick-assessment prompts are fixed.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::assessment::quick_prompt;
use crate::domain::foundation::{DomainError, ScorCategory};
use crate::domain::scoring::IOT_QUESTIONS;
use crate::ports::QuestionSource;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryQuestions {
    pub category: ScorCategory,
    pub label: String,
    pub description: String,
    pub questions: Vec<String>,
    /// Single prompt used by the quick assessment.
    pub quick_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Questionnaire {
    pub categories: Vec<CategoryQuestions>,
    pub iot: Vec<String>,
    pub total: usize,
}

pub struct GetQuestionsHandler {
    source: Arc<dyn QuestionSource>,
}

impl GetQuestionsHandler {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Result<Questionnaire, DomainError> {
        let bank = self.source.load().await?;
        let categories = ScorCategory::all()
            .iter()
            .map(|category| CategoryQuestions {
                category: *category,
                label: category.display_name().to_string(),
                description: category.description().to_string(),
                questions: bank.for_category(*category).to_vec(),
                quick_prompt: quick_prompt(*category).to_string(),
            })
            .collect();

        Ok(Questionnaire {
            categories,
            iot: IOT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            total: bank.total(),
        })
    }
}

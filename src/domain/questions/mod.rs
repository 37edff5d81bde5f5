//! Questions Module - The per-category question bank.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{CategoryValues, ScorCategory};

/// One readiness question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: ScorCategory,
    pub text: String,
}

impl Question {
    pub fn new(category: ScorCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionBankError {
    #[error("No questions defined for category '{category}'")]
    MissingCategory { category: ScorCategory },
}

/// Questions grouped by category, in source order within each group.
///
/// Every category holds at least one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: CategoryValues<Vec<String>>,
}

impl QuestionBank {
    /// Groups a flat question list by category.
    ///
    /// # Errors
    /// - `MissingCategory` for the first category with no questions.
    pub fn from_questions(
        questions: impl IntoIterator<Item = Question>,
    ) -> Result<Self, QuestionBankError> {
        let mut grouped: CategoryValues<Vec<String>> = CategoryValues::default();
        for q in questions {
            let text = q.text.trim();
            if !text.is_empty() {
                grouped.get_mut(q.category).push(text.to_string());
            }
        }
        if let Some((category, _)) = grouped.iter().find(|(_, qs)| qs.is_empty()) {
            return Err(QuestionBankError::MissingCategory { category });
        }
        Ok(Self { questions: grouped })
    }

    /// Questions of one category.
    pub fn for_category(&self, category: ScorCategory) -> &[String] {
        self.questions.get(category)
    }

    /// Question count per category; a ratings submission must match it.
    pub fn counts(&self) -> CategoryValues<usize> {
        self.questions.map(|_, qs| qs.len())
    }

    pub fn total(&self) -> usize {
        self.questions.iter().map(|(_, qs)| qs.len()).sum()
    }

    /// Flattened questions in canonical category order.
    pub fn questions(&self) -> Vec<Question> {
        self.questions
            .iter()
            .flat_map(|(category, qs)| qs.iter().map(move |t| Question::new(category, t.clone())))
            .collect()
    }
}

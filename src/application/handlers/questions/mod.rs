//! Questionnaire queries.

mod get_questions;

pub use get_questions::{CategoryQuestions, GetQuestionsHandler, Questionnaire};

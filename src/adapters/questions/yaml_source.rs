//! YAML Question Source
//!
//! Reads the question bank from a YAML file of the form:
//!
//! ```yaml
//! questions:
//!   plan:
//!     - Demand forecasts are produced on a fixed cycle.
//!   source:
//!     - ...
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tracing::info;

use crate::domain::foundation::ScorCategory;
use crate::domain::questions::{Question, QuestionBank};
use crate::ports::{QuestionSource, QuestionSourceError};

/// Question bank shipped with the service.
pub const BUNDLED_QUESTIONS: &str = include_str!("../../../data/scor_questions.yaml");

#[derive(Debug, Deserialize)]
struct QuestionFile {
    questions: BTreeMap<String, Vec<String>>,
}

/// Parses a YAML question document.
pub fn parse_questions(yaml: &str) -> Result<QuestionBank, QuestionSourceError> {
    let file: QuestionFile = serde_yaml::from_str(yaml)
        .map_err(|e| QuestionSourceError::Malformed(e.to_string()))?;

    let mut questions = Vec::new();
    for (phase, texts) in file.questions {
        let category = phase
            .parse::<ScorCategory>()
            .map_err(|e| QuestionSourceError::Malformed(e.to_string()))?;
        questions.extend(texts.into_iter().map(|t| Question::new(category, t)));
    }
    Ok(QuestionBank::from_questions(questions)?)
}

/// File-based YAML question source.
#[derive(Debug, Clone)]
pub struct YamlQuestionSource {
    path: PathBuf,
}

impl YamlQuestionSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl QuestionSource for YamlQuestionSource {
    async fn load(&self) -> Result<QuestionBank, QuestionSourceError> {
        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| QuestionSourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        let bank = parse_questions(&yaml)?;
        info!(path = %self.path.display(), total = bank.total(), "Question bank loaded");
        Ok(bank)
    }
}

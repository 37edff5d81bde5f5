//! Question bank read from `SCOR_AI_Questions.xlsx`.
//!
//! The first sheet must carry a `SCOR Phase` column and a `Question` column
//! (`Question (AR)` is accepted as the question column too).

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::foundation::ScorCategory;
use crate::domain::questions::{Question, QuestionBank};
use crate::ports::{QuestionSource, QuestionSourceError};

use super::table::SpreadsheetTable;

const COL_PHASE: &str = "SCOR Phase";
const QUESTION_COLUMNS: [&str; 2] = ["Question", "Question (AR)"];

#[derive(Debug, Clone)]
pub struct SpreadsheetQuestionSource {
    table: SpreadsheetTable,
}

impl SpreadsheetQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: SpreadsheetTable::new(path, "Questions", Vec::new()),
        }
    }
}

#[async_trait]
impl QuestionSource for SpreadsheetQuestionSource {
    async fn load(&self) -> Result<QuestionBank, QuestionSourceError> {
        if !self.table.path().exists() {
            return Err(QuestionSourceError::Io(format!(
                "{} does not exist",
                self.table.path().display()
            )));
        }
        let rows = self.table.read_rows().await?;

        if !rows.has_column(COL_PHASE) {
            return Err(QuestionSourceError::Malformed(format!(
                "missing '{}' column",
                COL_PHASE
            )));
        }
        let question_col = QUESTION_COLUMNS
            .iter()
            .find(|c| rows.has_column(c))
            .ok_or_else(|| QuestionSourceError::Malformed("missing 'Question' column".into()))?;

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows.iter() {
            let phase = row.text(COL_PHASE);
            match phase.parse::<ScorCategory>() {
                Ok(category) => questions.push(Question::new(category, row.text(question_col))),
                Err(_) => warn!(phase = %phase, "Skipping question with unknown SCOR phase"),
            }
        }

        let bank = QuestionBank::from_questions(questions)?;
        info!(
            path = %self.table.path().display(),
            total = bank.total(),
            "Question bank loaded"
        );
        Ok(bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::spreadsheet::table::{write_table, CellValue};

    fn write_questions(path: &std::path::Path, question_header: &str, phases: &[&str]) {
        let mut book = umya_spreadsheet::new_file_empty_worksheet();
        let sheet = book.new_sheet("Questions").unwrap();
        let rows: Vec<Vec<CellValue>> = phases
            .iter()
            .map(|p| vec![CellValue::from(*p), CellValue::from(format!("How mature is {}?", p))])
            .collect();
        write_table(sheet, &[COL_PHASE, question_header], &rows);
        umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
    }

    #[tokio::test]
    async fn loads_questions_grouped_by_phase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.xlsx");
        write_questions(&path, "Question", &["Plan", "Source", "Make", "Make", "Deliver", "Return"]);

        let bank = SpreadsheetQuestionSource::new(&path).load().await.unwrap();
        assert_eq!(bank.total(), 6);
        assert_eq!(bank.counts().make, 2);
        assert_eq!(bank.for_category(ScorCategory::Plan), ["How mature is Plan?"]);
    }

    #[tokio::test]
    async fn accepts_arabic_question_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.xlsx");
        write_questions(&path, "Question (AR)", &["Plan", "Source", "Make", "Deliver", "Return"]);

        let bank = SpreadsheetQuestionSource::new(&path).load().await.unwrap();
        assert_eq!(bank.total(), 5);
    }

    #[tokio::test]
    async fn missing_phase_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.xlsx");
        write_questions(&path, "Question", &["Plan", "Source", "Make", "Deliver"]);

        let err = SpreadsheetQuestionSource::new(&path).load().await.unwrap_err();
        assert!(matches!(err, QuestionSourceError::Bank(_)));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpreadsheetQuestionSource::new(dir.path().join("nope.xlsx"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, QuestionSourceError::Io(_)));
    }
}

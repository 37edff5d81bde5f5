//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where benchmark records, the comparison log and quick results are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on restart
    Memory,
    /// `benchmark_data.xlsx`, `data_log.xlsx` and `quick_assessments.xlsx`
    /// under `data_dir`
    #[default]
    Spreadsheet,
    /// `assessment_records`, `comparison_log` and `quick_assessments` tables
    Postgres,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding the spreadsheet files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_records_file")]
    pub records_file: String,

    #[serde(default = "default_comparison_log_file")]
    pub comparison_log_file: String,

    #[serde(default = "default_quick_assessments_file")]
    pub quick_assessments_file: String,

    /// Question bank (`.xlsx` or `.yaml`); the bundled bank is used when unset
    pub questions_file: Option<String>,
}

impl StorageConfig {
    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(&self.records_file)
    }

    pub fn comparison_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.comparison_log_file)
    }

    pub fn quick_assessments_path(&self) -> PathBuf {
        self.data_dir.join(&self.quick_assessments_file)
    }

    /// Relative question files resolve against `data_dir`.
    pub fn questions_path(&self) -> Option<PathBuf> {
        self.questions_file
            .as_ref()
            .filter(|name| !name.trim().is_empty())
            .map(|name| self.data_dir.join(name))
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::Spreadsheet {
            if self.records_file.trim().is_empty() {
                return Err(ValidationError::EmptyFileName("storage.records_file"));
            }
            if self.comparison_log_file.trim().is_empty() {
                return Err(ValidationError::EmptyFileName(
                    "storage.comparison_log_file",
                ));
            }
            if self.quick_assessments_file.trim().is_empty() {
                return Err(ValidationError::EmptyFileName(
                    "storage.quick_assessments_file",
                ));
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            records_file: default_records_file(),
            comparison_log_file: default_comparison_log_file(),
            quick_assessments_file: default_quick_assessments_file(),
            questions_file: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_records_file() -> String {
    "benchmark_data.xlsx".to_string()
}

fn default_comparison_log_file() -> String {
    "data_log.xlsx".to_string()
}

fn default_quick_assessments_file() -> String {
    "quick_assessments.xlsx".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_spreadsheets_in_data_dir() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Spreadsheet);
        assert_eq!(config.records_path(), PathBuf::from("data/benchmark_data.xlsx"));
        assert_eq!(config.comparison_log_path(), PathBuf::from("data/data_log.xlsx"));
        assert_eq!(
            config.quick_assessments_path(),
            PathBuf::from("data/quick_assessments.xlsx")
        );
        assert!(config.questions_path().is_none());
    }

    #[test]
    fn blank_questions_file_means_bundled() {
        let config = StorageConfig {
            questions_file: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.questions_path().is_none());
    }

    #[test]
    fn questions_file_resolves_against_data_dir() {
        let config = StorageConfig {
            data_dir: PathBuf::from("/srv/scor"),
            questions_file: Some("SCOR_AI_Questions.xlsx".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.questions_path(),
            Some(PathBuf::from("/srv/scor/SCOR_AI_Questions.xlsx"))
        );
    }

    #[test]
    fn empty_records_file_is_rejected_for_spreadsheets() {
        let config = StorageConfig {
            records_file: String::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::EmptyFileName("storage.records_file"))
        );

        let memory = StorageConfig {
            backend: StorageBackend::Memory,
            records_file: String::new(),
            ..Default::default()
        };
        assert!(memory.validate().is_ok());
    }
}

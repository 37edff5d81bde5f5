//! Report export configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Pandoc executable; `pandoc` on PATH when unset
    pub pandoc_path: Option<String>,

    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 300 {
            return Err(ValidationError::InvalidPdfTimeout);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: default_pdf_timeout(),
        }
    }
}

fn default_pdf_timeout() -> u64 {
    30
}

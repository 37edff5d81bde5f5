//! Report Exporter Port - Renders an assessment report in a download format.
//!
//! The application builds an `AssessmentReport` from the session state and
//! hands it to this port; adapters (like `ReportExportService`) turn it into
//! bytes for JSON, XLSX, Markdown, HTML or PDF.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::AssessmentReport;

/// Port for exporting an assessment report.
///
/// # Contract
///
/// Implementations must:
/// - Render every section the report carries
/// - Return `UnsupportedFormat` instead of an empty document for formats they
///   cannot produce
/// - Never alter the computed values (scores are rendered as given)
///
/// # Usage
///
/// ```rust,ignore
/// let exporter: &dyn ReportExporter = get_exporter();
/// let doc = exporter.export(&report, ExportFormat::Xlsx).await?;
/// ```
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Render `report` in `format`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if rendering or conversion fails.
    async fn export(
        &self,
        report: &AssessmentReport,
        format: ExportFormat,
    ) -> Result<ExportedDocument, ExportError>;

    /// Check whether `format` can currently be produced.
    ///
    /// PDF depends on an external converter; the other formats are always
    /// available.
    async fn is_available(&self, format: ExportFormat) -> bool;
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Pretty-printed JSON payload.
    Json,
    /// Excel workbook, one sheet per analysis.
    Xlsx,
    Markdown,
    Html,
    Pdf,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" | "htm" => Ok(ExportFormat::Html),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedDocument {
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }

    /// Create from text content (JSON, Markdown, HTML).
    pub fn from_text(text: String, format: ExportFormat, base_filename: &str) -> Self {
        Self::new(text.into_bytes(), format, base_filename)
    }
}

/// Errors that can occur during report export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// External converter (Pandoc) is not available.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Workbook generation failed: {0}")]
    WorkbookFailed(String),

    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }

    pub fn workbook_failed(reason: impl Into<String>) -> Self {
        Self::WorkbookFailed(reason.into())
    }

    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        let code = match &err {
            ExportError::UnsupportedFormat(_) => ErrorCode::InvalidFormat,
            _ => ErrorCode::ExportFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

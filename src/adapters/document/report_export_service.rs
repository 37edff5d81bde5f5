//! Report export service adapter.
//!
//! - JSON via `serde_json` (pretty-printed payload)
//! - XLSX via `umya-spreadsheet` (one sheet per analysis)
//! - Markdown from `AssessmentReport::to_markdown`
//! - HTML from the Markdown using pulldown-cmark
//! - PDF from the Markdown using Pandoc (external executable)

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use pulldown_cmark::{html, Options, Parser};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::adapters::spreadsheet::report_workbook::report_workbook_bytes;
use crate::domain::report::AssessmentReport;
use crate::ports::{ExportError, ExportFormat, ExportedDocument, ReportExporter};

/// Export service for assessment reports.
///
/// PDF conversion shells out to Pandoc; when it is missing, PDF requests
/// fail with `ServiceUnavailable` and every other format keeps working.
#[derive(Debug, Clone)]
pub struct ReportExportService {
    /// Path to pandoc executable. If None, will search PATH.
    pandoc_path: Option<String>,
    pdf_timeout_secs: u64,
}

impl Default for ReportExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportExportService {
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: 30,
        }
    }

    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    async fn check_pandoc(&self) -> bool {
        let output = Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }

    async fn markdown_to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        if !self.check_pandoc().await {
            return Err(ExportError::service_unavailable(
                "Pandoc is not installed; PDF export requires Pandoc",
            ));
        }

        let mut child = Command::new(self.pandoc_command())
            .args([
                "-f",
                "markdown",
                "-t",
                "pdf",
                "--pdf-engine=xelatex",
                "-V",
                "geometry:margin=1in",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExportError::pdf_failed(format!("Failed to start Pandoc: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| ExportError::pdf_failed(format!("Failed to write to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(
            Duration::from_secs(self.pdf_timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.pdf_timeout_secs))?
        .map_err(|e| ExportError::pdf_failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(stderr = %stderr.trim(), "Pandoc exited with an error");
            return Err(ExportError::pdf_failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

/// Renders Markdown as a standalone HTML page.
pub fn markdown_to_html(markdown: &str, title: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);
    let mut body = String::new();
    html::push_html(&mut body, parser);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="scor-report">
{body}
    </article>
</body>
</html>"#,
        title = html_escape(title),
        css = REPORT_CSS,
        body = body
    )
}

/// Download name for a report: `scor-report-<company>`.
pub fn base_filename(report: &AssessmentReport) -> String {
    let slug: String = report
        .respondent
        .company
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "scor-report".to_string()
    } else {
        format!("scor-report-{}", slug)
    }
}

#[async_trait]
impl ReportExporter for ReportExportService {
    async fn export(
        &self,
        report: &AssessmentReport,
        format: ExportFormat,
    ) -> Result<ExportedDocument, ExportError> {
        let base = base_filename(report);
        debug!(assessment_id = %report.assessment_id, %format, "Exporting report");

        let doc = match format {
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(report)
                    .map_err(|e| ExportError::SerializationFailed(e.to_string()))?;
                ExportedDocument::from_text(json, format, &base)
            }
            ExportFormat::Xlsx => {
                let report = report.clone();
                let bytes = tokio::task::spawn_blocking(move || report_workbook_bytes(&report))
                    .await
                    .map_err(|e| ExportError::workbook_failed(e.to_string()))?
                    .map_err(ExportError::workbook_failed)?;
                ExportedDocument::new(bytes, format, &base)
            }
            ExportFormat::Markdown => ExportedDocument::from_text(report.to_markdown(), format, &base),
            ExportFormat::Html => {
                let title = format!("SCOR Readiness Report - {}", report.respondent.company);
                let html = markdown_to_html(&report.to_markdown(), &title);
                ExportedDocument::from_text(html, format, &base)
            }
            ExportFormat::Pdf => {
                let pdf = self.markdown_to_pdf(&report.to_markdown()).await?;
                ExportedDocument::new(pdf, format, &base)
            }
        };
        Ok(doc)
    }

    async fn is_available(&self, format: ExportFormat) -> bool {
        match format {
            ExportFormat::Pdf => self.check_pandoc().await,
            _ => true,
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const REPORT_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    line-height: 1.6;
    color: #1f2937;
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
}
h1 { border-bottom: 2px solid #2563eb; padding-bottom: 0.5rem; }
h2 { border-bottom: 1px solid #e5e7eb; padding-bottom: 0.25rem; margin-top: 2rem; }
table { width: 100%; border-collapse: collapse; margin: 1em 0; }
th, td { padding: 0.5rem; text-align: left; border: 1px solid #e5e7eb; }
th { background-color: #f3f4f6; }
blockquote { margin: 1em 0; padding: 0.5em 1em; border-left: 4px solid #2563eb; color: #6b7280; }
@media print {
    body { padding: 0; }
    table { page-break-inside: avoid; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::sample_state;

    fn report() -> AssessmentReport {
        AssessmentReport::build(&sample_state()).unwrap()
    }

    #[tokio::test]
    async fn json_export_is_pretty_and_parseable() {
        let doc = ReportExportService::new()
            .export(&report(), ExportFormat::Json)
            .await
            .unwrap();

        assert_eq!(doc.filename, "scor-report-acme.json");
        let text = String::from_utf8(doc.content).unwrap();
        assert!(text.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["iot"]["average"], 3.5);
    }

    #[tokio::test]
    async fn markdown_export_matches_rendering() {
        let report = report();
        let doc = ReportExportService::new()
            .export(&report, ExportFormat::Markdown)
            .await
            .unwrap();
        assert_eq!(doc.content, report.to_markdown().into_bytes());
        assert_eq!(doc.content_type, "text/markdown; charset=utf-8");
    }

    #[tokio::test]
    async fn html_export_renders_tables() {
        let doc = ReportExportService::new()
            .export(&report(), ExportFormat::Html)
            .await
            .unwrap();
        let html = String::from_utf8(doc.content).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<title>SCOR Readiness Report - Acme</title>"));
    }

    #[tokio::test]
    async fn xlsx_export_is_a_zip_archive() {
        let doc = ReportExportService::new()
            .export(&report(), ExportFormat::Xlsx)
            .await
            .unwrap();
        assert_eq!(&doc.content[..2], b"PK");
        assert_eq!(doc.filename, "scor-report-acme.xlsx");
    }

    #[tokio::test]
    async fn pdf_without_pandoc_is_unavailable() {
        let service = ReportExportService::new().with_pandoc_path("/nonexistent/pandoc");
        let err = service.export(&report(), ExportFormat::Pdf).await.unwrap_err();
        assert!(matches!(err, ExportError::ServiceUnavailable(_)));
        assert!(!service.is_available(ExportFormat::Pdf).await);
        assert!(service.is_available(ExportFormat::Html).await);
    }

    #[test]
    fn filename_slug_strips_punctuation() {
        let mut r = report();
        r.respondent.company = "  Nile & Co. ".into();
        assert_eq!(base_filename(&r), "scor-report-nile---co");
    }

    #[test]
    fn html_escapes_title() {
        let html = markdown_to_html("# x", "<b>");
        assert!(html.contains("<title>&lt;b&gt;</title>"));
    }
}

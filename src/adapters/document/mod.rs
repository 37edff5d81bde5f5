//! Document adapters - Report rendering for download and delivery.
//!
//! - `ReportExportService` - JSON, XLSX, Markdown, HTML (pulldown-cmark) and
//!   PDF (Pandoc) exports of an assessment report

mod report_export_service;

pub use report_export_service::{base_filename, markdown_to_html, ReportExportService};

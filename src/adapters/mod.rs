//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - Process-local stores (tests, `memory` backend)
//! - `spreadsheet` - xlsx stores, question loader and report workbook
//! - `postgres` - Append-only record store and comparison log
//! - `questions` - YAML and bundled question banks
//! - `document` - Report export (JSON, XLSX, Markdown, HTML, PDF)
//! - `webhook` - Outbound report delivery
//! - `http` - Axum routes

pub mod document;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod questions;
pub mod spreadsheet;
pub mod webhook;

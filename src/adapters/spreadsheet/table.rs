//! Header-addressed tables on top of xlsx worksheets.
//!
//! Row 1 holds the column headers; data starts at row 2. Blank rows between
//! data rows are skipped with a warning.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::ports::{QuestionSourceError, RecordStoreError};

/// Errors raised while reading or writing a workbook table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("xlsx error: {0}")]
    Xlsx(String),

    #[error("spreadsheet task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("workbook has no sheet '{0}'")]
    MissingSheet(String),

    #[error("column '{column}' row {row}: expected a number, found '{value}'")]
    NotANumber {
        column: String,
        row: usize,
        value: String,
    },
}

impl TableError {
    fn xlsx(err: impl std::fmt::Display) -> Self {
        TableError::Xlsx(err.to_string())
    }
}

impl From<TableError> for RecordStoreError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NotANumber { .. } => RecordStoreError::Malformed(err.to_string()),
            _ => RecordStoreError::Io(err.to_string()),
        }
    }
}

impl From<TableError> for QuestionSourceError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NotANumber { .. } => QuestionSourceError::Malformed(err.to_string()),
            _ => QuestionSourceError::Io(err.to_string()),
        }
    }
}

/// One cell to write.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Rows read back from a sheet, keyed by header.
#[derive(Debug, Clone, Default)]
pub struct SheetRows {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    /// Sheet row number and cells of each data row.
    rows: Vec<(usize, Vec<String>)>,
}

impl SheetRows {
    /// Rows numbered consecutively from sheet row 2.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::numbered(headers, rows.into_iter().enumerate().map(|(i, r)| (i + 2, r)).collect())
    }

    fn numbered(headers: Vec<String>, rows: Vec<(usize, Vec<String>)>) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_string(), i))
            .collect();
        Self {
            headers,
            index,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, header: &str) -> bool {
        self.index.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First sheet row after the last data row.
    pub fn next_row(&self) -> usize {
        self.rows.last().map_or(2, |(number, _)| number + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = SheetRow<'_>> + '_ {
        self.rows.iter().map(move |(number, cells)| SheetRow {
            index: &self.index,
            number: *number,
            cells,
        })
    }
}

/// A single data row.
#[derive(Debug, Clone, Copy)]
pub struct SheetRow<'a> {
    index: &'a HashMap<String, usize>,
    number: usize,
    cells: &'a [String],
}

impl<'a> SheetRow<'a> {
    /// 1-based row number in the sheet.
    pub fn row_number(&self) -> usize {
        self.number
    }

    /// Trimmed cell text; empty when the column is absent.
    pub fn text(&self, header: &str) -> String {
        self.index
            .get(header)
            .and_then(|i| self.cells.get(*i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    /// Numeric cell; blank or non-numeric cells read as `None`.
    pub fn number(&self, header: &str) -> Option<f64> {
        self.text(header).parse::<f64>().ok()
    }

    /// Numeric cell that must be present.
    pub fn required_number(&self, header: &str) -> Result<f64, TableError> {
        let value = self.text(header);
        value.parse::<f64>().map_err(|_| TableError::NotANumber {
            column: header.to_string(),
            row: self.number,
            value,
        })
    }
}

/// Column letter for a 1-based index ("A", "Z", "AA").
pub fn column_letter(n: usize) -> String {
    let mut result = String::new();
    let mut n = n;
    while n > 0 {
        let rem = (n - 1) % 26;
        result.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    result
}

/// Writes `value` into `sheet` at a 1-based column and row.
pub fn set_cell(sheet: &mut Worksheet, col: usize, row: usize, value: &CellValue) {
    let address = format!("{}{}", column_letter(col), row);
    let cell = sheet.get_cell_mut(address.as_str());
    match value {
        CellValue::Text(text) => {
            cell.set_value(text.clone());
        }
        CellValue::Number(number) => {
            cell.set_value_number(*number);
        }
    }
}

/// Writes a header row followed by data rows starting at A1.
pub fn write_table(sheet: &mut Worksheet, headers: &[&str], rows: &[Vec<CellValue>]) {
    for (col, header) in headers.iter().enumerate() {
        set_cell(sheet, col + 1, 1, &CellValue::from(*header));
    }
    for (offset, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            set_cell(sheet, col + 1, offset + 2, value);
        }
    }
}

fn cell_text(sheet: &Worksheet, col: usize, row: usize) -> String {
    let address = format!("{}{}", column_letter(col), row);
    sheet
        .get_cell(address.as_str())
        .map(|cell| cell.get_value().to_string())
        .unwrap_or_default()
}

/// Reads a header-addressed table from `sheet`.
pub fn read_table(sheet: &Worksheet) -> SheetRows {
    let (max_col, max_row) = sheet.get_highest_column_and_row();
    let max_col = max_col as usize;
    let max_row = max_row as usize;

    let headers: Vec<String> = (1..=max_col)
        .map(|col| cell_text(sheet, col, 1).trim().to_string())
        .collect();

    let mut rows = Vec::new();
    let mut blank = Vec::new();
    for row in 2..=max_row {
        let cells: Vec<String> = (1..=max_col).map(|col| cell_text(sheet, col, row)).collect();
        if cells.iter().all(|c| c.trim().is_empty()) {
            blank.push(row);
            continue;
        }
        // Only gaps before a later data row are reported.
        for skipped in blank.drain(..) {
            warn!(sheet = %sheet.get_name(), row = skipped, "Skipping blank row");
        }
        rows.push((row, cells));
    }
    SheetRows::numbered(headers, rows)
}

/// Serializes a workbook to xlsx bytes.
pub fn workbook_bytes(book: &Spreadsheet) -> Result<Vec<u8>, TableError> {
    let mut cursor = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(book, &mut cursor).map_err(TableError::xlsx)?;
    Ok(cursor.into_inner())
}

/// A single-sheet xlsx file used as an append-only table.
///
/// The whole file is read and rewritten on every append. Appends from this
/// process are serialized through `write_lock`; other processes writing the
/// same file are last-write-wins.
#[derive(Debug, Clone)]
pub struct SpreadsheetTable {
    path: PathBuf,
    sheet_name: String,
    headers: Arc<Vec<String>>,
    write_lock: Arc<Mutex<()>>,
}

impl SpreadsheetTable {
    pub fn new(path: impl Into<PathBuf>, sheet_name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            path: path.into(),
            sheet_name: sheet_name.into(),
            headers: Arc::new(headers),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every row; a missing file is an empty table.
    pub async fn read_rows(&self) -> Result<SheetRows, TableError> {
        let path = self.path.clone();
        let sheet_name = self.sheet_name.clone();
        tokio::task::spawn_blocking(move || read_rows_blocking(&path, &sheet_name)).await?
    }

    /// Appends one row, creating the file with the configured headers first.
    pub async fn append_row(&self, row: Vec<CellValue>) -> Result<(), TableError> {
        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();
        let sheet_name = self.sheet_name.clone();
        let headers = Arc::clone(&self.headers);
        tokio::task::spawn_blocking(move || append_row_blocking(&path, &sheet_name, &headers, row))
            .await?
    }
}

fn read_rows_blocking(path: &Path, sheet_name: &str) -> Result<SheetRows, TableError> {
    if !path.exists() {
        return Ok(SheetRows::default());
    }
    let book = umya_spreadsheet::reader::xlsx::read(path).map_err(TableError::xlsx)?;
    let sheet = book
        .get_sheet_by_name(sheet_name)
        .or_else(|| book.get_sheet(&0))
        .ok_or_else(|| TableError::MissingSheet(sheet_name.to_string()))?;
    Ok(read_table(sheet))
}

fn append_row_blocking(
    path: &Path,
    sheet_name: &str,
    headers: &[String],
    row: Vec<CellValue>,
) -> Result<(), TableError> {
    let mut book = if path.exists() {
        umya_spreadsheet::reader::xlsx::read(path).map_err(TableError::xlsx)?
    } else {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| TableError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        umya_spreadsheet::new_file_empty_worksheet()
    };

    if book.get_sheet_by_name(sheet_name).is_none() {
        let sheet = book.new_sheet(sheet_name).map_err(TableError::xlsx)?;
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
        write_table(sheet, &header_refs, &[]);
    }
    let sheet = book
        .get_sheet_by_name_mut(sheet_name)
        .ok_or_else(|| TableError::MissingSheet(sheet_name.to_string()))?;

    // Place values under their headers, adding columns the file lacks.
    let existing = read_table(sheet);
    let mut columns: Vec<String> = existing.headers().to_vec();
    while columns.last().is_some_and(|h| h.is_empty()) {
        columns.pop();
    }
    let mut targets = Vec::with_capacity(headers.len());
    for header in headers {
        let col = match columns.iter().position(|h| h == header) {
            Some(idx) => idx + 1,
            None => {
                columns.push(header.clone());
                set_cell(sheet, columns.len(), 1, &CellValue::from(header.as_str()));
                columns.len()
            }
        };
        targets.push(col);
    }

    let next_row = existing.next_row();
    for (col, value) in targets.into_iter().zip(row.iter()) {
        set_cell(sheet, col, next_row, value);
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).map_err(TableError::xlsx)
}

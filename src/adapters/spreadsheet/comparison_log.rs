//! Comparison log kept in `data_log.xlsx`.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::benchmark::{ComparisonLogEntry, DispatchMethod, DispatchStatus, LogFilter};
use crate::domain::foundation::{CategoryValues, ScorCategory, Timestamp};
use crate::ports::{ComparisonLogStore, RecordStoreError};

use super::table::{CellValue, SheetRow, SpreadsheetTable};

const SHEET: &str = "Log";

const COL_NAME: &str = "Name";
const COL_COMPANY: &str = "Company";
const COL_SECTOR: &str = "Sector";
const COL_COUNTRY: &str = "Country";
const COL_DATE: &str = "Date";
const COL_IOT: &str = "IoT Average";
const COL_CPM: &str = "CPM Score";
const COL_STATUS: &str = "Status";
const COL_METHOD: &str = "Method";

fn headers() -> Vec<String> {
    let mut headers: Vec<String> = [
        COL_NAME, COL_COMPANY, COL_SECTOR, COL_COUNTRY, COL_DATE, COL_IOT, COL_CPM, COL_STATUS,
        COL_METHOD,
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    headers.extend(ScorCategory::all().iter().map(|c| c.sheet_column()));
    headers
}

/// Appends one row per dispatch attempt.
#[derive(Debug, Clone)]
pub struct SpreadsheetComparisonLog {
    table: SpreadsheetTable,
}

impl SpreadsheetComparisonLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: SpreadsheetTable::new(path, SHEET, headers()),
        }
    }
}

fn to_row(entry: &ComparisonLogEntry) -> Vec<CellValue> {
    let mut row: Vec<CellValue> = vec![
        entry.name.clone().into(),
        entry.company.clone().into(),
        entry.sector.clone().into(),
        entry.country.clone().into(),
        entry.logged_at.to_sheet_string().into(),
        entry.iot_average.into(),
        entry.cpm_score.into(),
        entry.status.as_str().into(),
        entry.method.as_str().into(),
    ];
    row.extend(entry.scores.iter().map(|(_, v)| CellValue::from(*v)));
    row
}

fn from_row(row: SheetRow<'_>) -> Result<ComparisonLogEntry, RecordStoreError> {
    let malformed = |e: &dyn std::fmt::Display| {
        RecordStoreError::Malformed(format!("row {}: {}", row.row_number(), e))
    };
    let score = |c: ScorCategory| row.required_number(&c.sheet_column());
    let logged_at = Timestamp::parse(&row.text(COL_DATE)).map_err(|e| malformed(&e))?;
    let status = row.text(COL_STATUS).parse::<DispatchStatus>().map_err(|e| malformed(&e))?;
    let method = row.text(COL_METHOD).parse::<DispatchMethod>().map_err(|e| malformed(&e))?;
    Ok(ComparisonLogEntry {
        name: row.text(COL_NAME),
        company: row.text(COL_COMPANY),
        sector: row.text(COL_SECTOR),
        country: row.text(COL_COUNTRY),
        logged_at,
        iot_average: row.required_number(COL_IOT)?,
        cpm_score: row.required_number(COL_CPM)?,
        status,
        method,
        scores: CategoryValues::new(
            score(ScorCategory::Plan)?,
            score(ScorCategory::Source)?,
            score(ScorCategory::Make)?,
            score(ScorCategory::Deliver)?,
            score(ScorCategory::Return)?,
        ),
    })
}

#[async_trait]
impl ComparisonLogStore for SpreadsheetComparisonLog {
    async fn append(&self, entry: &ComparisonLogEntry) -> Result<(), RecordStoreError> {
        self.table
            .append_row(to_row(entry))
            .await?;
        debug!(
            company = %entry.company,
            status = %entry.status,
            path = %self.table.path().display(),
            "Comparison log row appended"
        );
        Ok(())
    }

    async fn list(&self, filter: &LogFilter) -> Result<Vec<ComparisonLogEntry>, RecordStoreError> {
        let rows = self.table.read_rows().await?;
        let entries = rows.iter().map(from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(filter.apply(&entries))
    }
}

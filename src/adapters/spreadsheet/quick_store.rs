//! Named quick assessments kept in `quick_assessments.xlsx`.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::assessment::QuickAssessmentRecord;
use crate::domain::foundation::{CategoryValues, ScorCategory, Timestamp};
use crate::ports::{QuickAssessmentStore, RecordStoreError};

use super::table::{CellValue, SheetRow, SpreadsheetTable};

const SHEET: &str = "Quick";

const COL_COMPANY: &str = "Company";
const COL_DATE: &str = "Date";
const COL_TOTAL: &str = "Total";

fn headers() -> Vec<String> {
    let mut headers = vec![COL_COMPANY.to_string(), COL_DATE.to_string()];
    headers.extend(ScorCategory::all().iter().map(|c| c.display_name().to_string()));
    headers.push(COL_TOTAL.to_string());
    headers
}

/// Appends one row per named quick assessment.
#[derive(Debug, Clone)]
pub struct SpreadsheetQuickAssessmentStore {
    table: SpreadsheetTable,
}

impl SpreadsheetQuickAssessmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: SpreadsheetTable::new(path, SHEET, headers()),
        }
    }
}

fn to_row(record: &QuickAssessmentRecord) -> Vec<CellValue> {
    let mut row: Vec<CellValue> = vec![
        record.company.clone().into(),
        record.recorded_at.to_sheet_string().into(),
    ];
    row.extend(record.sliders.iter().map(|(_, v)| CellValue::from(f64::from(*v))));
    row.push(record.total.into());
    row
}

fn slider(row: &SheetRow<'_>, category: ScorCategory) -> Result<u8, RecordStoreError> {
    let value = row.required_number(category.display_name())?;
    if value.fract() != 0.0 || !(0.0..=100.0).contains(&value) {
        return Err(RecordStoreError::Malformed(format!(
            "column '{}' row {}: slider must be a whole number from 0 to 100, found {}",
            category.display_name(),
            row.row_number(),
            value
        )));
    }
    Ok(value as u8)
}

fn from_row(row: SheetRow<'_>) -> Result<QuickAssessmentRecord, RecordStoreError> {
    let recorded_at = Timestamp::parse(&row.text(COL_DATE)).map_err(|e| {
        RecordStoreError::Malformed(format!("row {}: {}", row.row_number(), e))
    })?;
    Ok(QuickAssessmentRecord {
        company: row.text(COL_COMPANY),
        recorded_at,
        sliders: CategoryValues::new(
            slider(&row, ScorCategory::Plan)?,
            slider(&row, ScorCategory::Source)?,
            slider(&row, ScorCategory::Make)?,
            slider(&row, ScorCategory::Deliver)?,
            slider(&row, ScorCategory::Return)?,
        ),
        total: row.required_number(COL_TOTAL)?,
    })
}

#[async_trait]
impl QuickAssessmentStore for SpreadsheetQuickAssessmentStore {
    async fn append(&self, record: &QuickAssessmentRecord) -> Result<(), RecordStoreError> {
        self.table.append_row(to_row(record)).await?;
        debug!(
            company = %record.company,
            total = record.total,
            path = %self.table.path().display(),
            "Quick assessment appended"
        );
        Ok(())
    }

    async fn list(&self) -> Result<Vec<QuickAssessmentRecord>, RecordStoreError> {
        let rows = self.table.read_rows().await?;
        rows.iter().map(from_row).collect()
    }
}

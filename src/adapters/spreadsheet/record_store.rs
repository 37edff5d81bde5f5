//! Benchmark records kept in `benchmark_data.xlsx`.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::benchmark::LogFilter;
use crate::domain::foundation::{CategoryValues, RecordId, ScorCategory, Timestamp};
use crate::ports::{AssessmentRecordStore, RecordStoreError};

use super::table::{CellValue, SheetRow, SpreadsheetTable};

const SHEET: &str = "Benchmark";

const COL_ID: &str = "Record ID";
const COL_NAME: &str = "Name";
const COL_COMPANY: &str = "Company";
const COL_SECTOR: &str = "Sector";
const COL_COUNTRY: &str = "Country";
const COL_DATE: &str = "Date";
const COL_IOT: &str = "IoT Average";
const COL_NOTES: &str = "Notes";
const COL_CONSENT: &str = "Consent";

fn headers() -> Vec<String> {
    let mut headers: Vec<String> = [COL_ID, COL_NAME, COL_COMPANY, COL_SECTOR, COL_COUNTRY, COL_DATE, COL_IOT]
        .iter()
        .map(|h| h.to_string())
        .collect();
    headers.extend(ScorCategory::all().iter().map(|c| c.display_name().to_string()));
    headers.push(COL_NOTES.to_string());
    headers.push(COL_CONSENT.to_string());
    headers
}

/// Appends one row per consented assessment.
#[derive(Debug, Clone)]
pub struct SpreadsheetRecordStore {
    table: SpreadsheetTable,
}

impl SpreadsheetRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: SpreadsheetTable::new(path, SHEET, headers()),
        }
    }
}

fn to_row(record: &AssessmentRecord) -> Vec<CellValue> {
    let mut row: Vec<CellValue> = vec![
        record.id.to_string().into(),
        record.name.clone().into(),
        record.company.clone().into(),
        record.sector.clone().into(),
        record.country.clone().into(),
        record.recorded_at.to_sheet_string().into(),
        record.iot_average.into(),
    ];
    row.extend(record.scores.iter().map(|(_, v)| CellValue::from(*v)));
    row.push(record.notes.clone().into());
    row.push(CellValue::from(if record.consent { "Yes" } else { "No" }));
    row
}

fn consent(row: &SheetRow<'_>) -> Result<bool, RecordStoreError> {
    let value = row.text(COL_CONSENT);
    match value.to_ascii_lowercase().as_str() {
        // Rows written before the column existed were consented only.
        "" | "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        _ => Err(RecordStoreError::Malformed(format!(
            "column '{}' row {}: expected Yes or No, found '{}'",
            COL_CONSENT,
            row.row_number(),
            value
        ))),
    }
}

fn from_row(row: SheetRow<'_>) -> Result<AssessmentRecord, RecordStoreError> {
    let recorded_at = Timestamp::parse(&row.text(COL_DATE)).map_err(|e| {
        RecordStoreError::Malformed(format!("row {}: {}", row.row_number(), e))
    })?;
    // Files written before ids were stored get a fresh id per read.
    let id = row.text(COL_ID).parse::<RecordId>().unwrap_or_default();
    let score = |c: ScorCategory| row.required_number(c.display_name());
    Ok(AssessmentRecord {
        id,
        recorded_at,
        name: row.text(COL_NAME),
        company: row.text(COL_COMPANY),
        sector: row.text(COL_SECTOR),
        country: row.text(COL_COUNTRY),
        scores: CategoryValues::new(
            score(ScorCategory::Plan)?,
            score(ScorCategory::Source)?,
            score(ScorCategory::Make)?,
            score(ScorCategory::Deliver)?,
            score(ScorCategory::Return)?,
        ),
        iot_average: row.required_number(COL_IOT)?,
        notes: row.text(COL_NOTES),
        consent: consent(&row)?,
    })
}

#[async_trait]
impl AssessmentRecordStore for SpreadsheetRecordStore {
    async fn append(&self, record: &AssessmentRecord) -> Result<(), RecordStoreError> {
        self.table
            .append_row(to_row(record))
            .await?;
        debug!(
            record_id = %record.id,
            company = %record.company,
            path = %self.table.path().display(),
            "Benchmark record appended"
        );
        Ok(())
    }

    async fn list(&self, filter: &LogFilter) -> Result<Vec<AssessmentRecord>, RecordStoreError> {
        let rows = self.table.read_rows().await?;
        let records = rows.iter().map(from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(filter.apply(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::spreadsheet::table::write_table;

    fn record(company: &str, sector: &str) -> AssessmentRecord {
        AssessmentRecord {
            id: RecordId::new(),
            recorded_at: Timestamp::parse("2026-03-01 09:30").unwrap(),
            name: "Sam".into(),
            company: company.into(),
            sector: sector.into(),
            country: "Egypt".into(),
            scores: CategoryValues::new(4.0, 2.33, 5.0, 1.5, 3.0),
            iot_average: 3.5,
            notes: "Two plants".into(),
            consent: true,
        }
    }

    #[tokio::test]
    async fn records_round_trip_through_the_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let store = SpreadsheetRecordStore::new(dir.path().join("benchmark_data.xlsx"));
        let original = record("Acme", "Logistics");

        store.append(&original).await.unwrap();
        let listed = store.list(&LogFilter::default()).await.unwrap();

        assert_eq!(listed, vec![original]);
    }

    #[tokio::test]
    async fn list_applies_filter() {
        let dir = tempfile::tempdir().unwrap();
        let store = SpreadsheetRecordStore::new(dir.path().join("benchmark_data.xlsx"));
        store.append(&record("Acme", "Logistics")).await.unwrap();
        store.append(&record("Beta", "Retail")).await.unwrap();

        let filter = LogFilter {
            sector: Some("Retail".into()),
            ..LogFilter::default()
        };
        let listed = store.list(&filter).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].company, "Beta");
    }

    #[tokio::test]
    async fn consent_flag_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SpreadsheetRecordStore::new(dir.path().join("benchmark_data.xlsx"));
        let declined = AssessmentRecord {
            consent: false,
            ..record("Beta", "Retail")
        };

        store.append(&record("Acme", "Logistics")).await.unwrap();
        store.append(&declined).await.unwrap();

        let listed = store.list(&LogFilter::default()).await.unwrap();
        let flags: Vec<_> = listed.iter().map(|r| (r.company.as_str(), r.consent)).collect();
        assert_eq!(flags, vec![("Acme", true), ("Beta", false)]);
    }

    #[tokio::test]
    async fn blank_score_cell_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benchmark_data.xlsx");
        let mut row = to_row(&record("Acme", "Logistics"));
        let plan = headers().iter().position(|h| h == "Plan").unwrap();
        row[plan] = CellValue::from("");

        let mut book = umya_spreadsheet::new_file_empty_worksheet();
        let sheet = book.new_sheet(SHEET).unwrap();
        let names = headers();
        let header_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        write_table(sheet, &header_refs, &[row]);
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let err = SpreadsheetRecordStore::new(path)
            .list(&LogFilter::default())
            .await
            .unwrap_err();
        match err {
            RecordStoreError::Malformed(message) => {
                assert!(message.contains("'Plan'"), "{}", message);
                assert!(message.contains("row 2"), "{}", message);
            }
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn headers_name_each_phase() {
        let h = headers();
        assert!(h.contains(&"Plan".to_string()));
        assert!(h.contains(&"Return".to_string()));
        assert_eq!(h.first().map(String::as_str), Some(COL_ID));
    }
}

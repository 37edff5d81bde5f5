//! PostgreSQL implementations of the record store and comparison log.
//!
//! Both tables are append-only; rows are inserted one at a time and never
//! updated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::benchmark::{ComparisonLogEntry, DispatchMethod, DispatchStatus, LogFilter};
use crate::domain::foundation::{CategoryValues, RecordId, Timestamp};
use crate::ports::{AssessmentRecordStore, ComparisonLogStore, RecordStoreError};

fn db_error(action: &str, e: sqlx::Error) -> RecordStoreError {
    RecordStoreError::Database(format!("Failed to {}: {}", action, e))
}

/// PostgreSQL implementation of the AssessmentRecordStore port.
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RecordRow {
    id: Uuid,
    recorded_at: DateTime<Utc>,
    name: String,
    company: String,
    sector: String,
    country: String,
    score_plan: f64,
    score_source: f64,
    score_make: f64,
    score_deliver: f64,
    score_return: f64,
    iot_average: f64,
    notes: String,
    consent: bool,
}

impl From<RecordRow> for AssessmentRecord {
    fn from(row: RecordRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            recorded_at: Timestamp::from_datetime(row.recorded_at),
            name: row.name,
            company: row.company,
            sector: row.sector,
            country: row.country,
            scores: CategoryValues::new(
                row.score_plan,
                row.score_source,
                row.score_make,
                row.score_deliver,
                row.score_return,
            ),
            iot_average: row.iot_average,
            notes: row.notes,
            consent: row.consent,
        }
    }
}

#[async_trait]
impl AssessmentRecordStore for PostgresRecordStore {
    async fn append(&self, record: &AssessmentRecord) -> Result<(), RecordStoreError> {
        let s = &record.scores;
        sqlx::query(
            r#"
            INSERT INTO assessment_records (
                id, recorded_at, name, company, sector, country,
                score_plan, score_source, score_make, score_deliver, score_return,
                iot_average, notes, consent
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.recorded_at.as_datetime())
        .bind(&record.name)
        .bind(&record.company)
        .bind(&record.sector)
        .bind(&record.country)
        .bind(s.plan)
        .bind(s.source)
        .bind(s.make)
        .bind(s.deliver)
        .bind(s.return_)
        .bind(record.iot_average)
        .bind(&record.notes)
        .bind(record.consent)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert assessment record", e))?;

        tracing::debug!(record_id = %record.id, company = %record.company, "Assessment record inserted");
        Ok(())
    }

    async fn list(&self, filter: &LogFilter) -> Result<Vec<AssessmentRecord>, RecordStoreError> {
        let rows: Vec<RecordRow> = sqlx::query_as(
            r#"
            SELECT id, recorded_at, name, company, sector, country,
                   score_plan, score_source, score_make, score_deliver, score_return,
                   iot_average, notes, consent
            FROM assessment_records
            WHERE ($1::text IS NULL OR company = $1)
              AND ($2::text IS NULL OR sector = $2)
              AND ($3::text IS NULL OR country = $3)
            ORDER BY seq
            "#,
        )
        .bind(&filter.company)
        .bind(&filter.sector)
        .bind(&filter.country)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list assessment records", e))?;

        Ok(rows.into_iter().map(AssessmentRecord::from).collect())
    }
}

/// PostgreSQL implementation of the ComparisonLogStore port.
pub struct PostgresComparisonLog {
    pool: PgPool,
}

impl PostgresComparisonLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LogRow {
    name: String,
    company: String,
    sector: String,
    country: String,
    logged_at: DateTime<Utc>,
    iot_average: f64,
    cpm_score: f64,
    status: String,
    method: String,
    score_plan: f64,
    score_source: f64,
    score_make: f64,
    score_deliver: f64,
    score_return: f64,
}

impl TryFrom<LogRow> for ComparisonLogEntry {
    type Error = RecordStoreError;

    fn try_from(row: LogRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<DispatchStatus>()
            .map_err(|e| RecordStoreError::Malformed(e.to_string()))?;
        let method = row
            .method
            .parse::<DispatchMethod>()
            .map_err(|e| RecordStoreError::Malformed(e.to_string()))?;
        Ok(Self {
            name: row.name,
            company: row.company,
            sector: row.sector,
            country: row.country,
            logged_at: Timestamp::from_datetime(row.logged_at),
            iot_average: row.iot_average,
            cpm_score: row.cpm_score,
            status,
            method,
            scores: CategoryValues::new(
                row.score_plan,
                row.score_source,
                row.score_make,
                row.score_deliver,
                row.score_return,
            ),
        })
    }
}

#[async_trait]
impl ComparisonLogStore for PostgresComparisonLog {
    async fn append(&self, entry: &ComparisonLogEntry) -> Result<(), RecordStoreError> {
        let s = &entry.scores;
        sqlx::query(
            r#"
            INSERT INTO comparison_log (
                name, company, sector, country, logged_at, iot_average, cpm_score,
                status, method,
                score_plan, score_source, score_make, score_deliver, score_return
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(&entry.name)
        .bind(&entry.company)
        .bind(&entry.sector)
        .bind(&entry.country)
        .bind(entry.logged_at.as_datetime())
        .bind(entry.iot_average)
        .bind(entry.cpm_score)
        .bind(entry.status.as_str())
        .bind(entry.method.as_str())
        .bind(s.plan)
        .bind(s.source)
        .bind(s.make)
        .bind(s.deliver)
        .bind(s.return_)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert comparison log row", e))?;
        Ok(())
    }

    async fn list(&self, filter: &LogFilter) -> Result<Vec<ComparisonLogEntry>, RecordStoreError> {
        let rows: Vec<LogRow> = sqlx::query_as(
            r#"
            SELECT name, company, sector, country, logged_at, iot_average, cpm_score,
                   status, method,
                   score_plan, score_source, score_make, score_deliver, score_return
            FROM comparison_log
            WHERE ($1::text IS NULL OR company = $1)
              AND ($2::text IS NULL OR sector = $2)
              AND ($3::text IS NULL OR country = $3)
            ORDER BY seq
            "#,
        )
        .bind(&filter.company)
        .bind(&filter.sector)
        .bind(&filter.country)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list comparison log", e))?;

        rows.into_iter().map(ComparisonLogEntry::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_row(consent: bool) -> RecordRow {
        RecordRow {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            name: "Sam".into(),
            company: "Acme".into(),
            sector: "Logistics".into(),
            country: "Egypt".into(),
            score_plan: 4.0,
            score_source: 2.33,
            score_make: 5.0,
            score_deliver: 1.5,
            score_return: 3.0,
            iot_average: 3.5,
            notes: String::new(),
            consent,
        }
    }

    #[test]
    fn record_row_keeps_consent_flag() {
        assert!(AssessmentRecord::from(record_row(true)).consent);
        assert!(!AssessmentRecord::from(record_row(false)).consent);
    }

    #[test]
    fn log_row_with_unknown_status_is_malformed() {
        let row = LogRow {
            name: "Sam".into(),
            company: "Acme".into(),
            sector: "Logistics".into(),
            country: "Egypt".into(),
            logged_at: Utc::now(),
            iot_average: 3.5,
            cpm_score: 0.0,
            status: "Pending".into(),
            method: "Webhook".into(),
            score_plan: 4.0,
            score_source: 2.33,
            score_make: 5.0,
            score_deliver: 1.5,
            score_return: 3.0,
        };
        assert!(matches!(
            ComparisonLogEntry::try_from(row),
            Err(RecordStoreError::Malformed(_))
        ));
    }
}

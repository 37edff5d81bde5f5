//! PostgreSQL implementation of the quick assessment table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::assessment::QuickAssessmentRecord;
use crate::domain::foundation::{CategoryValues, Timestamp};
use crate::ports::{QuickAssessmentStore, RecordStoreError};

pub struct PostgresQuickAssessmentStore {
    pool: PgPool,
}

impl PostgresQuickAssessmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct QuickRow {
    company: String,
    recorded_at: DateTime<Utc>,
    slider_plan: i16,
    slider_source: i16,
    slider_make: i16,
    slider_deliver: i16,
    slider_return: i16,
    total: f64,
}

fn slider(column: &str, value: i16) -> Result<u8, RecordStoreError> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| {
            RecordStoreError::Malformed(format!("{} out of range: {}", column, value))
        })
}

impl TryFrom<QuickRow> for QuickAssessmentRecord {
    type Error = RecordStoreError;

    fn try_from(row: QuickRow) -> Result<Self, Self::Error> {
        Ok(Self {
            company: row.company,
            recorded_at: Timestamp::from_datetime(row.recorded_at),
            sliders: CategoryValues::new(
                slider("slider_plan", row.slider_plan)?,
                slider("slider_source", row.slider_source)?,
                slider("slider_make", row.slider_make)?,
                slider("slider_deliver", row.slider_deliver)?,
                slider("slider_return", row.slider_return)?,
            ),
            total: row.total,
        })
    }
}

#[async_trait]
impl QuickAssessmentStore for PostgresQuickAssessmentStore {
    async fn append(&self, record: &QuickAssessmentRecord) -> Result<(), RecordStoreError> {
        let s = &record.sliders;
        sqlx::query(
            r#"
            INSERT INTO quick_assessments (
                company, recorded_at,
                slider_plan, slider_source, slider_make, slider_deliver, slider_return,
                total
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&record.company)
        .bind(record.recorded_at.as_datetime())
        .bind(i16::from(s.plan))
        .bind(i16::from(s.source))
        .bind(i16::from(s.make))
        .bind(i16::from(s.deliver))
        .bind(i16::from(s.return_))
        .bind(record.total)
        .execute(&self.pool)
        .await
        .map_err(|e| RecordStoreError::Database(format!("Failed to insert quick assessment: {}", e)))?;

        tracing::debug!(company = %record.company, total = record.total, "Quick assessment inserted");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<QuickAssessmentRecord>, RecordStoreError> {
        let rows: Vec<QuickRow> = sqlx::query_as(
            r#"
            SELECT company, recorded_at,
                   slider_plan, slider_source, slider_make, slider_deliver, slider_return,
                   total
            FROM quick_assessments
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RecordStoreError::Database(format!("Failed to list quick assessments: {}", e)))?;

        rows.into_iter().map(QuickAssessmentRecord::try_from).collect()
    }
}

//! QuickAssessmentHandler - One 0-100 slider per category, no session.
//!
//! The total is always computed; the result is stored only when a company
//! name is given.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::assessment::{QuickAssessment, QuickAssessmentRecord};
use crate::domain::foundation::{CategoryValues, DomainError, SliderValue};
use crate::ports::QuickAssessmentStore;

#[derive(Debug, Clone)]
pub struct QuickAssessmentCommand {
    /// May be blank; blank results are not stored.
    pub company: String,
    pub sliders: CategoryValues<u8>,
}

pub struct QuickAssessmentHandler {
    store: Arc<dyn QuickAssessmentStore>,
}

impl QuickAssessmentHandler {
    pub fn new(store: Arc<dyn QuickAssessmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: QuickAssessmentCommand) -> Result<QuickAssessment, DomainError> {
        let mut sliders = CategoryValues::<SliderValue>::default();
        for (category, value) in cmd.sliders.iter() {
            *sliders.get_mut(category) = SliderValue::try_new(*value)?;
        }

        let quick = QuickAssessment::evaluate(cmd.company, sliders);
        match quick.to_record() {
            Some(record) => {
                self.store.append(&record).await?;
                info!(company = %quick.company, total = quick.total, "Quick assessment stored");
            }
            None => debug!(total = quick.total, "Quick assessment without company not stored"),
        }
        Ok(quick)
    }
}

/// Lists stored quick assessments in insertion order.
pub struct ListQuickAssessmentsHandler {
    store: Arc<dyn QuickAssessmentStore>,
}

impl ListQuickAssessmentsHandler {
    pub fn new(store: Arc<dyn QuickAssessmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<QuickAssessmentRecord>, DomainError> {
        Ok(self.store.list().await?)
    }
}

//! Assessment Module - Session state, respondent, and persisted records.
//!
//! # Components
//!
//! - `AssessmentState` - immutable per-session state, replaced on every change
//! - `RespondentProfile` - identity fields plus storage consent
//! - `AssessmentRecord` - append-only row captured from a consented assessment
//! - `QuickAssessment` - five 0-100 sliders with an overall total
//! - `QuickAssessmentRecord` - stored row of a named quick assessment

mod quick;
mod record;
mod respondent;
mod state;

pub use quick::{quick_prompt, QuickAssessment, QuickAssessmentRecord};
pub use record::AssessmentRecord;
pub use respondent::RespondentProfile;
pub use state::{AssessmentState, ScoredAssessment};

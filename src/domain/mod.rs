//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `scoring` - Category averages, tiers, SWOT grouping, IoT sub-score
//! - `strategy` - IFE/EFE aggregation, strategic posture, IE grid, BCG positions
//! - `competitive` - Competitive Profile Matrix and ranking
//! - `recommendation` - Static narratives selected by tier and band
//! - `assessment` - Immutable session state, respondent, persisted records
//! - `benchmark` - Comparison log rows and analytics
//! - `questions` - Question bank grouped by category
//! - `report` - Export payload and Markdown rendering

pub mod assessment;
pub mod benchmark;
pub mod competitive;
pub mod foundation;
pub mod questions;
pub mod recommendation;
pub mod report;
pub mod scoring;
pub mod strategy;

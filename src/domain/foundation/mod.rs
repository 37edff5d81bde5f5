//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the readiness assessment domain.

mod category;
mod errors;
mod ids;
mod rating;
mod tier;
mod timestamp;

pub use category::{CategoryValues, ScorCategory};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentId, RecordId};
pub use rating::{ContinuousRating, FactorRating, LikertRating, SliderValue, Weight};
pub use tier::{
    RatingScale, Thresholds, Tier, CATEGORY_THRESHOLDS, COMPETITIVE_THRESHOLDS, IOT_THRESHOLDS,
};
pub use timestamp::Timestamp;

/// Rounds to a fixed number of decimal places for display and export.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

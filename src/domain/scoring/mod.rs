//! Scoring Module - Raw ratings to category averages, tiers, and SWOT groups.
//!
//! All functions are pure. Rating bounds are validated by the collection
//! layer before ratings reach the engine.

mod engine;
mod iot;
mod swot;

pub use engine::{CategoryScore, Scorecard, ScoringEngine, ScoringError};
pub use iot::{IotReadiness, IOT_QUESTIONS, IOT_QUESTION_COUNT};
pub use swot::{SwotGroup, SwotGroups};

//! Competitive Module - Competitive Profile Matrix (CPM).
//!
//! Independent of the scoring pipeline: consumes shared category weights
//! and per-entity ratings, returns a plain profile the caller may log.

mod comparator;

pub use comparator::{
    ComparisonError, CompetitiveComparator, CompetitiveProfile, EntityRatings, ProfileEntry,
    WEIGHT_TOLERANCE,
};

//! Recommendation Module - Static narrative selection.
//!
//! Narratives are fixed text chosen by tier or band; nothing here is
//! generated. Each call site keeps its own thresholds.

mod narratives;

pub use narratives::{
    category_narrative, competitive_narrative, iot_narrative, swot_advice, CategoryRecommendation,
    CompetitiveRecommendation, Recommendations, SwotAdvice,
};

//! Competitive Profile Matrix - weighted sum per entity and ranking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{
    round_to, CategoryValues, DomainError, ErrorCode, Tier, COMPETITIVE_THRESHOLDS,
};

/// Accepted distance of the weight sum from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 0.05;

/// Absorbs float noise at the band edges (0.95 and 1.05 are accepted).
const EDGE_EPSILON: f64 = 1e-9;

/// Errors that halt a comparison.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparisonError {
    #[error("Category weights sum to {total:.2}; expected 1.00 within ±0.05")]
    WeightSum { total: f64 },
}

impl From<ComparisonError> for DomainError {
    fn from(err: ComparisonError) -> Self {
        match &err {
            ComparisonError::WeightSum { total } => {
                DomainError::new(ErrorCode::WeightSum, err.to_string())
                    .with_detail("total", format!("{:.4}", total))
            }
        }
    }
}

/// Per-category ratings of one named entity, on the continuous 1.0-5.0 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRatings {
    pub name: String,
    pub ratings: CategoryValues<f64>,
}

impl EntityRatings {
    pub fn new(name: impl Into<String>, ratings: CategoryValues<f64>) -> Self {
        Self {
            name: name.into(),
            ratings,
        }
    }
}

/// Weighted score of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub name: String,
    /// Unrounded weighted sum.
    pub score: f64,
}

impl ProfileEntry {
    /// Score rounded to 2 decimal places.
    pub fn display_score(&self) -> f64 {
        round_to(self.score, 2)
    }

    /// Narrative band (weak below 3, strong from 4).
    pub fn band(&self) -> Tier {
        COMPETITIVE_THRESHOLDS.classify(self.display_score())
    }
}

/// Weighted scores of all compared entities, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveProfile {
    pub weights: CategoryValues<f64>,
    pub entries: Vec<ProfileEntry>,
}

impl CompetitiveProfile {
    /// Score of the named entity, if it was compared.
    pub fn score_of(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(ProfileEntry::display_score)
    }

    /// Entries by descending score; ties keep input order.
    pub fn ranked(&self) -> Vec<&ProfileEntry> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Highest-ranked entry.
    pub fn leader(&self) -> Option<&ProfileEntry> {
        self.ranked().into_iter().next()
    }

    /// 1-based rank of the named entity.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.ranked()
            .iter()
            .position(|e| e.name == name)
            .map(|idx| idx + 1)
    }
}

/// Computes competitive profiles.
pub struct CompetitiveComparator;

impl CompetitiveComparator {
    /// Checks that weights sum to 1.0 within the tolerance band.
    pub fn check_weights(weights: &CategoryValues<f64>) -> Result<f64, ComparisonError> {
        let total = weights.sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE + EDGE_EPSILON {
            return Err(ComparisonError::WeightSum { total });
        }
        Ok(total)
    }

    /// Scores every entity as `sum(weight[c] * rating[c])`.
    ///
    /// # Errors
    /// - `WeightSum` when the weights fall outside the tolerance band; no
    ///   entity is scored in that case.
    pub fn compare(
        weights: &CategoryValues<f64>,
        entities: &[EntityRatings],
    ) -> Result<CompetitiveProfile, ComparisonError> {
        Self::check_weights(weights)?;

        let entries = entities
            .iter()
            .map(|entity| ProfileEntry {
                name: entity.name.clone(),
                score: weights
                    .iter()
                    .map(|(category, w)| w * entity.ratings.get(category))
                    .sum(),
            })
            .collect();

        Ok(CompetitiveProfile {
            weights: *weights,
            entries,
        })
    }
}

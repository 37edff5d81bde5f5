//! Scoring engine - per-category averages and tier classification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{
    CategoryValues, DomainError, ErrorCode, RatingScale, ScorCategory, Tier, CATEGORY_THRESHOLDS,
};

use super::SwotGroups;

/// Errors raised while scoring raw ratings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A category has zero rated questions, so its average is undefined.
    #[error("Category '{category}' has no rated questions")]
    EmptyCategory { category: ScorCategory },
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        match &err {
            ScoringError::EmptyCategory { category } => {
                DomainError::new(ErrorCode::EmptyCategory, err.to_string())
                    .with_detail("category", category.display_name())
            }
        }
    }
}

/// Average readiness of one SCOR category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: ScorCategory,
    /// Arithmetic mean on the scale the ratings were collected on.
    pub average: f64,
    pub scale: RatingScale,
}

impl CategoryScore {
    pub fn new(category: ScorCategory, average: f64, scale: RatingScale) -> Self {
        Self {
            category,
            average,
            scale,
        }
    }

    /// Average converted to the canonical 1-5 scale.
    pub fn canonical_average(&self) -> f64 {
        self.scale.to_canonical(self.average)
    }

    /// Tier of this category, classified on the canonical scale.
    pub fn tier(&self) -> Tier {
        CATEGORY_THRESHOLDS.classify(self.canonical_average())
    }
}

/// The five category scores of one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    scores: CategoryValues<CategoryScore>,
    scale: RatingScale,
}

impl Scorecard {
    /// Builds a scorecard from already-computed averages.
    pub fn from_averages(averages: CategoryValues<f64>, scale: RatingScale) -> Self {
        Self {
            scores: averages.map(|category, avg| CategoryScore::new(category, *avg, scale)),
            scale,
        }
    }

    pub fn scale(&self) -> RatingScale {
        self.scale
    }

    /// Returns the score for one category.
    pub fn get(&self, category: ScorCategory) -> &CategoryScore {
        self.scores.get(category)
    }

    /// Iterates scores in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> + '_ {
        self.scores.iter().map(|(_, score)| score)
    }

    /// Averages on the collected scale.
    pub fn averages(&self) -> CategoryValues<f64> {
        self.scores.map(|_, score| score.average)
    }

    /// Averages converted to the canonical 1-5 scale.
    pub fn canonical_averages(&self) -> CategoryValues<f64> {
        self.scores.map(|_, score| score.canonical_average())
    }

    /// Tier of every category.
    pub fn tiers(&self) -> CategoryValues<Tier> {
        self.scores.map(|_, score| score.tier())
    }

    /// Mean of the five category averages, on the collected scale.
    pub fn overall(&self) -> f64 {
        self.averages().sum() / ScorCategory::COUNT as f64
    }

    /// Number of categories in each tier, ordered weak to strong.
    pub fn tier_distribution(&self) -> Vec<(Tier, usize)> {
        let tiers = self.tiers();
        Tier::all()
            .iter()
            .map(|tier| (*tier, tiers.iter().filter(|(_, t)| *t == tier).count()))
            .collect()
    }

    /// Buckets the categories into SWOT groups by tier.
    pub fn swot(&self) -> SwotGroups {
        SwotGroups::derive(self)
    }
}

/// Converts raw per-question ratings into a scorecard.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Arithmetic mean of a rating list, or `None` when the list is empty.
    pub fn average(ratings: &[u8]) -> Option<f64> {
        if ratings.is_empty() {
            return None;
        }
        let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
        Some(f64::from(sum) / ratings.len() as f64)
    }

    /// Scores every category.
    ///
    /// # Errors
    /// - `EmptyCategory` for the first category (canonical order) with no ratings.
    ///
    /// Rating bounds are not checked here; callers validate raw input.
    pub fn score(
        ratings: &CategoryValues<Vec<u8>>,
        scale: RatingScale,
    ) -> Result<Scorecard, ScoringError> {
        let mut averages = CategoryValues::<f64>::default();
        for (category, values) in ratings.iter() {
            let avg = Self::average(values).ok_or(ScoringError::EmptyCategory { category })?;
            *averages.get_mut(category) = avg;
        }
        Ok(Scorecard::from_averages(averages, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn example_ratings() -> CategoryValues<Vec<u8>> {
        CategoryValues::new(
            vec![4, 5, 3],
            vec![2, 2, 3],
            vec![5, 5, 5, 5],
            vec![1, 2],
            vec![3, 3, 3],
        )
    }

    #[test]
    fn average_of_empty_list_is_none() {
        assert_eq!(ScoringEngine::average(&[]), None);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        assert_eq!(ScoringEngine::average(&[4, 5, 3]), Some(4.0));
        assert_eq!(ScoringEngine::average(&[1, 2]), Some(1.5));
    }

    #[test]
    fn scores_reference_example() {
        let card = ScoringEngine::score(&example_ratings(), RatingScale::Likert).unwrap();

        assert_eq!(card.get(ScorCategory::Plan).average, 4.0);
        assert!((card.get(ScorCategory::Source).average - 7.0 / 3.0).abs() < 1e-9);
        assert_eq!(card.get(ScorCategory::Make).average, 5.0);
        assert_eq!(card.get(ScorCategory::Deliver).average, 1.5);
        assert_eq!(card.get(ScorCategory::Return).average, 3.0);

        let tiers = card.tiers();
        assert_eq!(tiers.plan, Tier::Strong);
        assert_eq!(tiers.source, Tier::Weak);
        assert_eq!(tiers.make, Tier::Strong);
        assert_eq!(tiers.deliver, Tier::Weak);
        assert_eq!(tiers.return_, Tier::Moderate);
    }

    #[test]
    fn empty_category_is_reported_not_defaulted() {
        let mut ratings = example_ratings();
        ratings.deliver.clear();

        let err = ScoringEngine::score(&ratings, RatingScale::Likert).unwrap_err();
        assert_eq!(
            err,
            ScoringError::EmptyCategory {
                category: ScorCategory::Deliver
            }
        );
    }

    #[test]
    fn empty_category_maps_to_domain_code() {
        let err: DomainError = ScoringError::EmptyCategory {
            category: ScorCategory::Make,
        }
        .into();
        assert_eq!(err.code, ErrorCode::EmptyCategory);
        assert_eq!(err.details.get("category"), Some(&"Make".to_string()));
    }

    #[test]
    fn percent_scale_tiers_on_canonical_value() {
        let card = Scorecard::from_averages(
            CategoryValues::new(30.0, 37.5, 60.0, 75.0, 100.0),
            RatingScale::Percent,
        );
        let tiers = card.tiers();
        assert_eq!(tiers.plan, Tier::Weak);
        assert_eq!(tiers.source, Tier::Moderate);
        assert_eq!(tiers.make, Tier::Moderate);
        assert_eq!(tiers.deliver, Tier::Strong);
        assert_eq!(tiers.return_, Tier::Strong);
        // Collected scale is preserved.
        assert_eq!(card.get(ScorCategory::Plan).average, 30.0);
    }

    #[test]
    fn overall_is_mean_of_category_averages() {
        let card = Scorecard::from_averages(
            CategoryValues::new(1.0, 2.0, 3.0, 4.0, 5.0),
            RatingScale::Likert,
        );
        assert_eq!(card.overall(), 3.0);
    }

    #[test]
    fn tier_distribution_counts_every_category() {
        let card = ScoringEngine::score(&example_ratings(), RatingScale::Likert).unwrap();
        let dist = card.tier_distribution();
        assert_eq!(
            dist,
            vec![(Tier::Weak, 2), (Tier::Moderate, 1), (Tier::Strong, 2)]
        );
    }

    proptest! {
        #[test]
        fn average_matches_sum_over_len(ratings in prop::collection::vec(1u8..=5, 1..40)) {
            let expected = ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64;
            let avg = ScoringEngine::average(&ratings).unwrap();
            prop_assert!((avg - expected).abs() < 1e-9);
        }

        #[test]
        fn tier_is_monotonic(a in 1.0f64..=5.0, b in 1.0f64..=5.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_tier = CategoryScore::new(ScorCategory::Plan, lo, RatingScale::Likert).tier();
            let hi_tier = CategoryScore::new(ScorCategory::Plan, hi, RatingScale::Likert).tier();
            prop_assert!(lo_tier <= hi_tier);
        }
    }
}

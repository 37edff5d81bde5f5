//! Weighted factors and the IFE/EFE aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FactorRating, Weight};
use crate::domain::scoring::SwotGroups;

/// A labelled factor with its weight and 1-4 rating.
///
/// Bounds are the caller's contract; the aggregate does not check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedFactor {
    pub label: String,
    pub weight: f64,
    pub rating: u8,
}

impl WeightedFactor {
    pub fn new(label: impl Into<String>, weight: f64, rating: u8) -> Self {
        Self {
            label: label.into(),
            weight,
            rating,
        }
    }

    /// Factor with the default weight (0.1) and rating (3).
    pub fn with_defaults(label: impl Into<String>) -> Self {
        Self::new(
            label,
            Weight::DEFAULT.value(),
            FactorRating::DEFAULT.value(),
        )
    }

    /// Contribution of this factor to its aggregate.
    pub fn weighted_score(&self) -> f64 {
        self.weight * f64::from(self.rating)
    }
}

/// Sum of `weight * rating` over the factors. Empty input totals 0.
pub fn aggregate_total(factors: &[WeightedFactor]) -> f64 {
    factors.iter().map(WeightedFactor::weighted_score).sum()
}

/// Internal (strengths + weaknesses) and external (opportunities + threats)
/// factor lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorSet {
    pub internal: Vec<WeightedFactor>,
    pub external: Vec<WeightedFactor>,
}

impl FactorSet {
    pub fn new(internal: Vec<WeightedFactor>, external: Vec<WeightedFactor>) -> Self {
        Self { internal, external }
    }

    /// One default-weighted factor per SWOT label.
    pub fn defaults_for(swot: &SwotGroups) -> Self {
        Self {
            internal: swot
                .internal_labels()
                .into_iter()
                .map(WeightedFactor::with_defaults)
                .collect(),
            external: swot
                .external_labels()
                .into_iter()
                .map(WeightedFactor::with_defaults)
                .collect(),
        }
    }

    /// Internal Factor Evaluation total.
    pub fn ife(&self) -> f64 {
        aggregate_total(&self.internal)
    }

    /// External Factor Evaluation total.
    pub fn efe(&self) -> f64 {
        aggregate_total(&self.external)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ScorCategory;
    use proptest::prelude::*;

    #[test]
    fn empty_list_totals_zero() {
        assert_eq!(aggregate_total(&[]), 0.0);
    }

    #[test]
    fn reference_example_totals() {
        let internal = vec![
            WeightedFactor::new("Plan", 0.3, 4),
            WeightedFactor::new("Source", 0.2, 2),
        ];
        let external = vec![WeightedFactor::new("Return", 0.5, 4)];

        assert!((aggregate_total(&internal) - 1.6).abs() < 1e-9);
        assert!((aggregate_total(&external) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn weights_need_not_sum_to_one() {
        let factors = vec![
            WeightedFactor::new("A", 1.0, 4),
            WeightedFactor::new("B", 1.0, 4),
        ];
        assert_eq!(aggregate_total(&factors), 8.0);
    }

    #[test]
    fn defaults_are_one_tenth_and_three() {
        let factor = WeightedFactor::with_defaults("Make");
        assert_eq!(factor.weight, 0.1);
        assert_eq!(factor.rating, 3);
    }

    #[test]
    fn default_factor_set_follows_swot_labels() {
        let swot = SwotGroups {
            strengths: vec![ScorCategory::Plan],
            weaknesses: vec![ScorCategory::Deliver],
            opportunities: vec![ScorCategory::Make],
            threats: vec!["Fuel prices".to_string()],
        };
        let set = FactorSet::defaults_for(&swot);

        let internal: Vec<_> = set.internal.iter().map(|f| f.label.as_str()).collect();
        let external: Vec<_> = set.external.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(internal, vec!["Plan", "Deliver"]);
        assert_eq!(external, vec!["Make", "Fuel prices"]);
        assert!((set.ife() - 0.6).abs() < 1e-9);
        assert!((set.efe() - 0.6).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn aggregate_scales_linearly_with_ratings(
            factors in prop::collection::vec((0.0f64..=1.0, 1u8..=4), 0..12),
            k in 1u8..=4,
        ) {
            let base: Vec<_> = factors
                .iter()
                .map(|(w, r)| WeightedFactor::new("f", *w, *r))
                .collect();
            let scaled: Vec<_> = factors
                .iter()
                .map(|(w, r)| WeightedFactor::new("f", *w, r * k))
                .collect();
            let expected = aggregate_total(&base) * f64::from(k);
            prop_assert!((aggregate_total(&scaled) - expected).abs() < 1e-9);
        }
    }
}

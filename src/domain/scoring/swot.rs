//! SWOT grouping derived from category tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ScorCategory, Tier};

use super::Scorecard;

/// The four SWOT buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwotGroup {
    Strength,
    Weakness,
    Opportunity,
    Threat,
}

impl SwotGroup {
    /// Group a category of the given tier is placed in.
    ///
    /// Threats are never derived from tiers.
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Strong => SwotGroup::Strength,
            Tier::Moderate => SwotGroup::Opportunity,
            Tier::Weak => SwotGroup::Weakness,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SwotGroup::Strength => "Strength",
            SwotGroup::Weakness => "Weakness",
            SwotGroup::Opportunity => "Opportunity",
            SwotGroup::Threat => "Threat",
        }
    }

    /// True for groups feeding the internal factor evaluation.
    pub fn is_internal(&self) -> bool {
        matches!(self, SwotGroup::Strength | SwotGroup::Weakness)
    }
}

impl fmt::Display for SwotGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Categories bucketed by tier, plus externally supplied threats.
///
/// Every category appears in exactly one of the three derived groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotGroups {
    pub strengths: Vec<ScorCategory>,
    pub weaknesses: Vec<ScorCategory>,
    pub opportunities: Vec<ScorCategory>,
    pub threats: Vec<String>,
}

impl SwotGroups {
    /// Scans the scorecard once in canonical order.
    pub fn derive(scorecard: &Scorecard) -> Self {
        let mut groups = SwotGroups::default();
        for score in scorecard.iter() {
            match SwotGroup::for_tier(score.tier()) {
                SwotGroup::Strength => groups.strengths.push(score.category),
                SwotGroup::Weakness => groups.weaknesses.push(score.category),
                SwotGroup::Opportunity => groups.opportunities.push(score.category),
                SwotGroup::Threat => {}
            }
        }
        groups
    }

    /// Replaces the threat list, dropping blank entries.
    pub fn with_threats<I, S>(mut self, threats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.threats = threats
            .into_iter()
            .map(Into::into)
            .map(|t: String| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    /// Group a category was placed in, if any.
    pub fn group_of(&self, category: ScorCategory) -> Option<SwotGroup> {
        if self.strengths.contains(&category) {
            Some(SwotGroup::Strength)
        } else if self.weaknesses.contains(&category) {
            Some(SwotGroup::Weakness)
        } else if self.opportunities.contains(&category) {
            Some(SwotGroup::Opportunity)
        } else {
            None
        }
    }

    /// Labels of strengths followed by weaknesses.
    pub fn internal_labels(&self) -> Vec<String> {
        self.strengths
            .iter()
            .chain(self.weaknesses.iter())
            .map(|c| c.display_name().to_string())
            .collect()
    }

    /// Labels of opportunities followed by threats.
    pub fn external_labels(&self) -> Vec<String> {
        self.opportunities
            .iter()
            .map(|c| c.display_name().to_string())
            .chain(self.threats.iter().cloned())
            .collect()
    }

    /// Number of categories placed by tier (threats excluded).
    pub fn derived_len(&self) -> usize {
        self.strengths.len() + self.weaknesses.len() + self.opportunities.len()
    }
}

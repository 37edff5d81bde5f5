//! ScorCategory enum representing the five SCOR process phases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The five fixed SCOR process categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorCategory {
    Plan,
    Source,
    Make,
    Deliver,
    Return,
}

impl ScorCategory {
    /// Number of categories in the model.
    pub const COUNT: usize = 5;

    /// Returns all categories in canonical order.
    pub fn all() -> &'static [ScorCategory; Self::COUNT] {
        &[
            ScorCategory::Plan,
            ScorCategory::Source,
            ScorCategory::Make,
            ScorCategory::Deliver,
            ScorCategory::Return,
        ]
    }

    /// Returns the 0-based index of this category in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            ScorCategory::Plan => 0,
            ScorCategory::Source => 1,
            ScorCategory::Make => 2,
            ScorCategory::Deliver => 3,
            ScorCategory::Return => 4,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ScorCategory::Plan => "Plan",
            ScorCategory::Source => "Source",
            ScorCategory::Make => "Make",
            ScorCategory::Deliver => "Deliver",
            ScorCategory::Return => "Return",
        }
    }

    /// Returns a short description of the process phase.
    pub fn description(&self) -> &'static str {
        match self {
            ScorCategory::Plan => "Demand and supply planning",
            ScorCategory::Source => "Procurement and supplier integration",
            ScorCategory::Make => "Production and manufacturing",
            ScorCategory::Deliver => "Order fulfilment and shipment tracking",
            ScorCategory::Return => "Returns handling and reverse logistics",
        }
    }

    /// Column header used for this category in log spreadsheets.
    pub fn sheet_column(&self) -> String {
        format!("SCOR - {}", self.display_name())
    }
}

impl fmt::Display for ScorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ScorCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plan" => Ok(ScorCategory::Plan),
            "source" => Ok(ScorCategory::Source),
            "make" => Ok(ScorCategory::Make),
            "deliver" => Ok(ScorCategory::Deliver),
            "return" => Ok(ScorCategory::Return),
            _ => Err(ValidationError::invalid_format(
                "category",
                format!("unknown SCOR phase '{}'", s),
            )),
        }
    }
}

/// One value per SCOR category.
///
/// All five slots are always present, so lookups are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryValues<T> {
    pub plan: T,
    pub source: T,
    pub make: T,
    pub deliver: T,
    #[serde(rename = "return")]
    pub return_: T,
}

impl<T> CategoryValues<T> {
    /// Creates values in canonical category order.
    pub fn new(plan: T, source: T, make: T, deliver: T, return_: T) -> Self {
        Self {
            plan,
            source,
            make,
            deliver,
            return_,
        }
    }

    /// Builds values by evaluating `f` for every category.
    pub fn from_fn(mut f: impl FnMut(ScorCategory) -> T) -> Self {
        Self {
            plan: f(ScorCategory::Plan),
            source: f(ScorCategory::Source),
            make: f(ScorCategory::Make),
            deliver: f(ScorCategory::Deliver),
            return_: f(ScorCategory::Return),
        }
    }

    /// Returns the value for a category.
    pub fn get(&self, category: ScorCategory) -> &T {
        match category {
            ScorCategory::Plan => &self.plan,
            ScorCategory::Source => &self.source,
            ScorCategory::Make => &self.make,
            ScorCategory::Deliver => &self.deliver,
            ScorCategory::Return => &self.return_,
        }
    }

    /// Returns a mutable reference to the value for a category.
    pub fn get_mut(&mut self, category: ScorCategory) -> &mut T {
        match category {
            ScorCategory::Plan => &mut self.plan,
            ScorCategory::Source => &mut self.source,
            ScorCategory::Make => &mut self.make,
            ScorCategory::Deliver => &mut self.deliver,
            ScorCategory::Return => &mut self.return_,
        }
    }

    /// Iterates `(category, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ScorCategory, &T)> + '_ {
        ScorCategory::all().iter().map(move |c| (*c, self.get(*c)))
    }

    /// Maps every value, keeping the category association.
    pub fn map<U>(&self, mut f: impl FnMut(ScorCategory, &T) -> U) -> CategoryValues<U> {
        CategoryValues::from_fn(|c| f(c, self.get(c)))
    }
}

impl CategoryValues<f64> {
    /// Sum of all five values.
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| *v).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_5_categories_in_order() {
        let all = ScorCategory::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], ScorCategory::Plan);
        assert_eq!(all[4], ScorCategory::Return);
    }

    #[test]
    fn order_index_matches_position_in_all() {
        for (idx, category) in ScorCategory::all().iter().enumerate() {
            assert_eq!(category.order_index(), idx);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Plan".parse::<ScorCategory>().unwrap(), ScorCategory::Plan);
        assert_eq!(" deliver ".parse::<ScorCategory>().unwrap(), ScorCategory::Deliver);
        assert_eq!("RETURN".parse::<ScorCategory>().unwrap(), ScorCategory::Return);
    }

    #[test]
    fn parse_rejects_unknown_phase() {
        assert!("Store".parse::<ScorCategory>().is_err());
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&ScorCategory::Source).unwrap(), "\"source\"");
    }

    #[test]
    fn sheet_column_is_prefixed() {
        assert_eq!(ScorCategory::Make.sheet_column(), "SCOR - Make");
    }

    #[test]
    fn category_values_lookup_is_total() {
        let values = CategoryValues::new(1, 2, 3, 4, 5);
        assert_eq!(*values.get(ScorCategory::Plan), 1);
        assert_eq!(*values.get(ScorCategory::Return), 5);
    }

    #[test]
    fn category_values_iterates_in_canonical_order() {
        let values = CategoryValues::from_fn(|c| c.order_index());
        let collected: Vec<_> = values.iter().map(|(c, v)| (c, *v)).collect();
        assert_eq!(collected[2], (ScorCategory::Make, 2));
        assert_eq!(collected.len(), 5);
    }

    #[test]
    fn category_values_serializes_return_key() {
        let values = CategoryValues::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let json = serde_json::to_value(values).unwrap();
        assert_eq!(json["return"], 5.0);
        assert_eq!(json["plan"], 1.0);
    }

    #[test]
    fn category_values_sum_adds_all_slots() {
        let weights = CategoryValues::new(0.2, 0.2, 0.2, 0.2, 0.2);
        assert!((weights.sum() - 1.0).abs() < 1e-12);
    }
}

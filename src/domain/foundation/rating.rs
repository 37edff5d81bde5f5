//! Bounded rating and weight value objects used at the collection boundary.
//!
//! The calculators accept plain numbers; these types are how callers
//! validate raw input before handing it over.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Likert answer to a single readiness question: 1 (absent) to 5 (leading).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LikertRating(u8);

impl LikertRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a rating, returning error if outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                f64::from(Self::MIN),
                f64::from(Self::MAX),
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LikertRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<LikertRating> for u8 {
    fn from(rating: LikertRating) -> Self {
        rating.0
    }
}

impl fmt::Display for LikertRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rating attached to an IFE/EFE factor: 1 (major weakness/threat) to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FactorRating(u8);

impl FactorRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Rating given to a factor nobody has scored yet.
    pub const DEFAULT: Self = Self(3);

    /// Creates a factor rating, returning error if outside 1..=4.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "factor_rating",
                f64::from(Self::MIN),
                f64::from(Self::MAX),
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for FactorRating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for FactorRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<FactorRating> for u8 {
    fn from(rating: FactorRating) -> Self {
        rating.0
    }
}

/// Factor or category weight in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Weight given to a factor nobody has weighted yet.
    pub const DEFAULT: Self = Self(0.1);

    /// Creates a weight, returning error if outside `[0, 1]` or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("weight", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Weight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

/// A continuous 1.0 to 5.0 rating of a company in one category, used for
/// competitive comparison.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ContinuousRating(f64);

impl ContinuousRating {
    /// Creates a rating, returning error if outside `[1, 5]` or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(1.0..=5.0).contains(&value) {
            return Err(ValidationError::out_of_range("rating", 1.0, 5.0, value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ContinuousRating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ContinuousRating> for f64 {
    fn from(rating: ContinuousRating) -> Self {
        rating.0
    }
}

/// A slider position between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SliderValue(u8);

impl SliderValue {
    /// Creates a slider value, returning error if above 100.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "slider",
                0.0,
                100.0,
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SliderValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<SliderValue> for u8 {
    fn from(value: SliderValue) -> Self {
        value.0
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

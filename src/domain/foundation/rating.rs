//! Rating value object for the 1-5 assessment scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A user-supplied rating on the 1 (lowest) to 5 (highest) scale.
///
/// Used both for per-dimension maturity ratings and for area priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    /// Creates a Rating, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if (1..=5).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(ValidationError::out_of_range("rating", 1, 5, value as i64))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float for weighted arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns true if this is the top of the scale.
    pub fn is_critical(&self) -> bool {
        self.0 == 5
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::try_new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

//! Maturity level value object (discrete stages 1-5).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Rating, ValidationError};

/// A discrete stage of organizational capability.
///
/// Variant names follow the generic level titles; industry-specific titles
/// live in the level descriptions of each industry configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum MaturityLevel {
    #[default]
    Initial = 1,
    Defined = 2,
    Managed = 3,
    Measured = 4,
    Optimized = 5,
}

impl MaturityLevel {
    /// All levels in ascending order.
    pub const ALL: [MaturityLevel; 5] = [
        MaturityLevel::Initial,
        MaturityLevel::Defined,
        MaturityLevel::Managed,
        MaturityLevel::Measured,
        MaturityLevel::Optimized,
    ];

    /// Creates a level from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(MaturityLevel::Initial),
            2 => Ok(MaturityLevel::Defined),
            3 => Ok(MaturityLevel::Managed),
            4 => Ok(MaturityLevel::Measured),
            5 => Ok(MaturityLevel::Optimized),
            _ => Err(ValidationError::out_of_range("maturity_level", 1, 5, value as i64)),
        }
    }

    /// Nearest level to a composite score, rounding halves up.
    ///
    /// Scores outside [1, 5] clamp to the ends of the scale.
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            return MaturityLevel::Initial;
        }
        let rounded = score.round().clamp(1.0, 5.0) as u8;
        Self::try_from_u8(rounded).unwrap_or(MaturityLevel::Initial)
    }

    /// Default ambition when no target has been chosen: two levels up, capped.
    pub fn default_target(current: MaturityLevel) -> Self {
        let raised = (current.value() + 2).min(5);
        Self::try_from_u8(raised).unwrap_or(MaturityLevel::Optimized)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Signed number of levels from `self` up to `target`.
    pub fn levels_to(&self, target: MaturityLevel) -> i8 {
        target.value() as i8 - self.value() as i8
    }

    /// Returns the generic display title.
    pub fn title(&self) -> &'static str {
        match self {
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Managed => "Managed",
            MaturityLevel::Measured => "Measured",
            MaturityLevel::Optimized => "Optimized",
        }
    }

    /// The dimension rating equivalent to this level.
    pub fn as_rating(&self) -> Rating {
        Rating::try_new(self.value()).unwrap_or(Rating::MIN)
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MaturityLevel::try_from_u8(value)
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_u8_accepts_one_through_five() {
        for (i, level) in MaturityLevel::ALL.iter().enumerate() {
            assert_eq!(MaturityLevel::try_from_u8(i as u8 + 1).unwrap(), *level);
        }
    }

    #[test]
    fn try_from_u8_rejects_out_of_range() {
        assert!(MaturityLevel::try_from_u8(0).is_err());
        assert!(MaturityLevel::try_from_u8(6).is_err());
    }

    #[test]
    fn from_score_rounds_half_up() {
        assert_eq!(MaturityLevel::from_score(2.49), MaturityLevel::Defined);
        assert_eq!(MaturityLevel::from_score(2.5), MaturityLevel::Managed);
        assert_eq!(MaturityLevel::from_score(4.76), MaturityLevel::Optimized);
    }

    #[test]
    fn from_score_clamps_out_of_range() {
        assert_eq!(MaturityLevel::from_score(0.2), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::from_score(7.0), MaturityLevel::Optimized);
        assert_eq!(MaturityLevel::from_score(f64::NAN), MaturityLevel::Initial);
    }

    #[test]
    fn default_target_is_two_levels_up_capped() {
        assert_eq!(
            MaturityLevel::default_target(MaturityLevel::Initial),
            MaturityLevel::Managed
        );
        assert_eq!(
            MaturityLevel::default_target(MaturityLevel::Measured),
            MaturityLevel::Optimized
        );
        assert_eq!(
            MaturityLevel::default_target(MaturityLevel::Optimized),
            MaturityLevel::Optimized
        );
    }

    #[test]
    fn levels_to_is_signed() {
        assert_eq!(MaturityLevel::Initial.levels_to(MaturityLevel::Optimized), 4);
        assert_eq!(MaturityLevel::Measured.levels_to(MaturityLevel::Defined), -2);
        assert_eq!(MaturityLevel::Managed.levels_to(MaturityLevel::Managed), 0);
    }

    #[test]
    fn level_serializes_as_number() {
        assert_eq!(serde_json::to_string(&MaturityLevel::Measured).unwrap(), "4");
        let level: MaturityLevel = serde_json::from_str("2").unwrap();
        assert_eq!(level, MaturityLevel::Defined);
        assert!(serde_json::from_str::<MaturityLevel>("6").is_err());
    }

    #[test]
    fn as_rating_matches_value() {
        assert_eq!(MaturityLevel::Managed.as_rating().value(), 3);
    }

    #[test]
    fn default_is_initial() {
        assert_eq!(MaturityLevel::default(), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::default().value(), 1);
    }
}

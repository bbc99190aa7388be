//! Transformation timeline value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A strictly positive transformation horizon, in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct TimelineMonths(u16);

impl TimelineMonths {
    /// The standard twelve-month horizon.
    pub const STANDARD: TimelineMonths = TimelineMonths(12);

    /// Creates a timeline, rejecting zero months.
    pub fn try_new(months: u16) -> Result<Self, ValidationError> {
        if months == 0 {
            return Err(ValidationError::out_of_range(
                "timeline_months",
                1,
                u16::MAX as i64,
                0,
            ));
        }
        Ok(Self(months))
    }

    /// Returns the number of months.
    pub fn months(&self) -> u16 {
        self.0
    }

    /// Returns the horizon in (fractional) years.
    pub fn years(&self) -> f64 {
        f64::from(self.0) / 12.0
    }
}

impl Default for TimelineMonths {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<u16> for TimelineMonths {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        TimelineMonths::try_new(value)
    }
}

impl From<TimelineMonths> for u16 {
    fn from(timeline: TimelineMonths) -> Self {
        timeline.0
    }
}

impl fmt::Display for TimelineMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}

//! Policies for incomplete input and inconsistent configuration.

use serde::{Deserialize, Serialize};

/// How the scorer treats a dimension the user has not rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnratedDimensionPolicy {
    /// Unrated dimensions count as the lowest rating (1).
    #[default]
    AssumeLowest,
    /// Scoring fails until every dimension has been rated.
    Reject,
}

/// What to do when dimension weights do not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Refuse to load the configuration.
    #[default]
    Reject,
    /// Divide every weight by the total.
    Normalize,
}

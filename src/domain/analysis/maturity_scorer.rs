//! Maturity Scorer - weighted composite of per-dimension ratings.

use thiserror::Error;

use crate::domain::assessment::{
    Dimension, DimensionScores, UnratedDimensionPolicy, SCORE_CEILING, SCORE_FLOOR,
};

/// Scoring failed under a strict policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Dimensions not yet rated: {}", .0.join(", "))]
    UnratedDimensions(Vec<String>),
}

/// Computes the composite maturity score.
pub struct MaturityScorer;

impl MaturityScorer {
    /// Weighted sum of ratings, clamped to [1, 5].
    ///
    /// # Edge Cases
    /// - Unrated dimension: counts as rating 1
    /// - No dimensions: returns 1
    pub fn compute_score(scores: &DimensionScores, dimensions: &[Dimension]) -> f64 {
        let composite: f64 = dimensions
            .iter()
            .map(|d| scores.rating_or_lowest(d.id.as_str()).as_f64() * d.weight)
            .sum();

        if composite.is_nan() {
            return SCORE_FLOOR;
        }
        composite.clamp(SCORE_FLOOR, SCORE_CEILING)
    }

    /// Like [`compute_score`](Self::compute_score), honouring the unrated policy.
    pub fn try_compute_score(
        scores: &DimensionScores,
        dimensions: &[Dimension],
        policy: UnratedDimensionPolicy,
    ) -> Result<f64, ScoringError> {
        if policy == UnratedDimensionPolicy::Reject {
            let unrated = scores.unrated(dimensions);
            if !unrated.is_empty() {
                return Err(ScoringError::UnratedDimensions(
                    unrated.iter().map(|id| id.to_string()).collect(),
                ));
            }
        }
        Ok(Self::compute_score(scores, dimensions))
    }
}

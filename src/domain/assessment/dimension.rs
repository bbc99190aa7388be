//! Scoring dimensions and per-dimension user ratings.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{CatalogError, WeightPolicy};
use crate::domain::foundation::{DimensionId, MaturityLevel, Rating};

/// Allowed drift of the weight total from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// A weighted axis of capability contributing to the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub name: String,
    pub weight: f64,
    pub description: String,
}

impl Dimension {
    pub fn new(
        id: DimensionId,
        name: impl Into<String>,
        weight: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            description: description.into(),
        }
    }
}

/// Checks a dimension set and applies the weight policy.
///
/// Every weight must lie in (0, 1] and ids must be unique. When the weights
/// do not sum to 1, `WeightPolicy::Reject` fails and `WeightPolicy::Normalize`
/// rescales them.
pub fn validate_dimensions(
    dimensions: Vec<Dimension>,
    policy: WeightPolicy,
) -> Result<Vec<Dimension>, CatalogError> {
    if dimensions.is_empty() {
        return Err(CatalogError::NoDimensions);
    }

    let mut seen = HashSet::new();
    for d in &dimensions {
        if !seen.insert(d.id.as_str()) {
            return Err(CatalogError::DuplicateDimension(d.id.to_string()));
        }
        if !(d.weight > 0.0 && d.weight <= 1.0) {
            return Err(CatalogError::InvalidWeight {
                dimension: d.id.to_string(),
                weight: d.weight,
            });
        }
    }

    let sum: f64 = dimensions.iter().map(|d| d.weight).sum();
    if (sum - 1.0).abs() <= WEIGHT_TOLERANCE {
        return Ok(dimensions);
    }

    match policy {
        WeightPolicy::Reject => Err(CatalogError::WeightsDoNotSumToOne { sum }),
        WeightPolicy::Normalize => {
            tracing::warn!(sum, "Normalizing dimension weights");
            Ok(dimensions
                .into_iter()
                .map(|d| Dimension {
                    weight: d.weight / sum,
                    ..d
                })
                .collect())
        }
    }
}

/// User ratings keyed by dimension id.
///
/// Starts empty; entries are added as the user rates each dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionScores(HashMap<DimensionId, Rating>);

impl DimensionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every dimension rated at the same level (the level-card preset).
    pub fn uniform(level: MaturityLevel, dimensions: &[Dimension]) -> Self {
        let rating = level.as_rating();
        Self(dimensions.iter().map(|d| (d.id.clone(), rating)).collect())
    }

    /// Sets or overwrites the rating of a dimension.
    pub fn rate(&mut self, dimension: DimensionId, rating: Rating) {
        self.0.insert(dimension, rating);
    }

    /// Builder-style variant of [`rate`](Self::rate).
    pub fn with(mut self, dimension: DimensionId, rating: Rating) -> Self {
        self.rate(dimension, rating);
        self
    }

    pub fn get(&self, dimension: &str) -> Option<Rating> {
        self.0.get(dimension).copied()
    }

    /// The rating of a dimension, or the lowest rating if unrated.
    pub fn rating_or_lowest(&self, dimension: &str) -> Rating {
        self.get(dimension).unwrap_or(Rating::MIN)
    }

    /// Ids of configured dimensions that have no rating yet.
    pub fn unrated<'a>(&self, dimensions: &'a [Dimension]) -> Vec<&'a DimensionId> {
        dimensions
            .iter()
            .filter(|d| !self.0.contains_key(d.id.as_str()))
            .map(|d| &d.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(DimensionId, Rating)> for DimensionScores {
    fn from_iter<I: IntoIterator<Item = (DimensionId, Rating)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(id: &str, weight: f64) -> Dimension {
        Dimension::new(DimensionId::new(id).unwrap(), id.to_uppercase(), weight, "")
    }

    fn rating(v: u8) -> Rating {
        Rating::try_new(v).unwrap()
    }

    #[test]
    fn validate_accepts_weights_summing_to_one() {
        let dims = vec![dim("d1", 0.3), dim("d2", 0.25), dim("d3", 0.2), dim("d4", 0.15), dim("d5", 0.1)];
        let result = validate_dimensions(dims.clone(), WeightPolicy::Reject).unwrap();
        assert_eq!(result, dims);
    }

    #[test]
    fn validate_rejects_bad_sum_under_reject_policy() {
        let dims = vec![dim("d1", 0.5), dim("d2", 0.3)];
        let err = validate_dimensions(dims, WeightPolicy::Reject).unwrap_err();
        assert!(matches!(err, CatalogError::WeightsDoNotSumToOne { .. }));
    }

    #[test]
    fn validate_normalizes_under_normalize_policy() {
        let dims = vec![dim("d1", 0.5), dim("d2", 0.3)];
        let result = validate_dimensions(dims, WeightPolicy::Normalize).unwrap();
        let sum: f64 = result.iter().map(|d| d.weight).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((result[0].weight - 0.625).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_non_positive_weight() {
        let dims = vec![dim("d1", 1.0), dim("d2", 0.0)];
        assert!(matches!(
            validate_dimensions(dims, WeightPolicy::Normalize),
            Err(CatalogError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicates_and_empty() {
        assert_eq!(
            validate_dimensions(vec![], WeightPolicy::Reject),
            Err(CatalogError::NoDimensions)
        );
        let dims = vec![dim("d1", 0.5), dim("d1", 0.5)];
        assert_eq!(
            validate_dimensions(dims, WeightPolicy::Reject),
            Err(CatalogError::DuplicateDimension("d1".to_string()))
        );
    }

    #[test]
    fn scores_default_unrated_to_lowest() {
        let scores = DimensionScores::new().with(DimensionId::new("d1").unwrap(), rating(4));
        assert_eq!(scores.rating_or_lowest("d1").value(), 4);
        assert_eq!(scores.rating_or_lowest("d2").value(), 1);
    }

    #[test]
    fn scores_report_unrated_dimensions() {
        let dims = vec![dim("d1", 0.5), dim("d2", 0.5)];
        let scores = DimensionScores::new().with(DimensionId::new("d2").unwrap(), rating(2));
        let unrated = scores.unrated(&dims);
        assert_eq!(unrated.len(), 1);
        assert_eq!(unrated[0].as_str(), "d1");
    }

    #[test]
    fn uniform_fills_every_dimension() {
        let dims = vec![dim("d1", 0.5), dim("d2", 0.5)];
        let scores = DimensionScores::uniform(MaturityLevel::Measured, &dims);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get("d2"), Some(rating(4)));
    }

    #[test]
    fn scores_deserialize_from_plain_map() {
        let scores: DimensionScores = serde_json::from_str(r#"{"d1": 3, "d2": 5}"#).unwrap();
        assert_eq!(scores.get("d1"), Some(rating(3)));
        assert!(serde_json::from_str::<DimensionScores>(r#"{"d1": 6}"#).is_err());
    }
}

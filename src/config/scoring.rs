//! Scoring and catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::assessment::{UnratedDimensionPolicy, WeightPolicy};

/// How incomplete input and inconsistent weights are treated
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Treatment of dimensions the user has not rated
    #[serde(default)]
    pub unrated_policy: UnratedDimensionPolicy,

    /// Treatment of dimension weights that do not sum to 1
    #[serde(default)]
    pub weight_policy: WeightPolicy,

    /// Catalog file to load instead of the embedded one (JSON or YAML)
    pub catalog_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.unrated_policy, UnratedDimensionPolicy::AssumeLowest);
        assert_eq!(config.weight_policy, WeightPolicy::Reject);
        assert!(config.catalog_path.is_none());
    }
}

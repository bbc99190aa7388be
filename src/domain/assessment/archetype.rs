//! Maturity archetypes: named score bands over the composite scale.

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Lowest composite score.
pub const SCORE_FLOOR: f64 = 1.0;
/// Highest composite score.
pub const SCORE_CEILING: f64 = 5.0;

const BAND_EPSILON: f64 = 1e-9;

/// A named maturity band assigned by composite score range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub min_score: f64,
    pub max_score: f64,
    pub label: String,
    pub description: String,
}

impl Archetype {
    pub fn new(
        min_score: f64,
        max_score: f64,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            min_score,
            max_score,
            label: label.into(),
            description: description.into(),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, score: f64) -> bool {
        self.min_score <= score && score <= self.max_score
    }
}

/// Ordered, gap-free archetype bands covering exactly [1, 5].
///
/// Adjacent bands share their boundary value; the first-match scan of the
/// classifier hands that value to the lower band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArchetypeBands(Vec<Archetype>);

impl ArchetypeBands {
    pub fn try_new(bands: Vec<Archetype>) -> Result<Self, CatalogError> {
        let (first, last) = match (bands.first(), bands.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(CatalogError::NoArchetypes),
        };

        for band in &bands {
            if !(band.min_score <= band.max_score) {
                return Err(CatalogError::InvertedBand {
                    label: band.label.clone(),
                    min: band.min_score,
                    max: band.max_score,
                });
            }
        }

        for pair in bands.windows(2) {
            if (pair[1].min_score - pair[0].max_score).abs() > BAND_EPSILON {
                return Err(CatalogError::NonContiguousBands {
                    previous: pair[0].label.clone(),
                    next: pair[1].label.clone(),
                });
            }
        }

        if (first.min_score - SCORE_FLOOR).abs() > BAND_EPSILON
            || (last.max_score - SCORE_CEILING).abs() > BAND_EPSILON
        {
            return Err(CatalogError::IncompleteCoverage {
                min: first.min_score,
                max: last.max_score,
            });
        }

        Ok(Self(bands))
    }

    pub fn as_slice(&self) -> &[Archetype] {
        &self.0
    }

    pub fn lowest(&self) -> &Archetype {
        &self.0[0]
    }

    pub fn highest(&self) -> &Archetype {
        &self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ArchetypeBands {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bands = Vec::<Archetype>::deserialize(deserializer)?;
        ArchetypeBands::try_new(bands).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn standard_bands() -> ArchetypeBands {
        ArchetypeBands::try_new(vec![
            Archetype::new(1.0, 2.0, "Digital Novice", ""),
            Archetype::new(2.0, 3.0, "Digital Follower", ""),
            Archetype::new(3.0, 4.0, "Digital Adopter", ""),
            Archetype::new(4.0, 4.76, "Digital Innovator", ""),
            Archetype::new(4.76, 5.0, "Future Miner", ""),
        ])
        .unwrap()
    }

    #[test]
    fn accepts_contiguous_bands_covering_the_scale() {
        let bands = standard_bands();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands.lowest().label, "Digital Novice");
        assert_eq!(bands.highest().label, "Future Miner");
    }

    #[test]
    fn rejects_empty_band_list() {
        assert_eq!(ArchetypeBands::try_new(vec![]), Err(CatalogError::NoArchetypes));
    }

    #[test]
    fn rejects_gap_between_bands() {
        let result = ArchetypeBands::try_new(vec![
            Archetype::new(1.0, 1.99, "Low", ""),
            Archetype::new(2.0, 5.0, "High", ""),
        ]);
        assert!(matches!(result, Err(CatalogError::NonContiguousBands { .. })));
    }

    #[test]
    fn rejects_partial_coverage() {
        let result = ArchetypeBands::try_new(vec![Archetype::new(1.0, 4.0, "Only", "")]);
        assert!(matches!(result, Err(CatalogError::IncompleteCoverage { .. })));
    }

    #[test]
    fn rejects_inverted_band() {
        let result = ArchetypeBands::try_new(vec![Archetype::new(5.0, 1.0, "Upside down", "")]);
        assert!(matches!(result, Err(CatalogError::InvertedBand { .. })));
    }

    #[test]
    fn deserialization_runs_validation() {
        let json = r#"[{"min_score":1.0,"max_score":3.0,"label":"A","description":""},
                      {"min_score":3.5,"max_score":5.0,"label":"B","description":""}]"#;
        assert!(serde_json::from_str::<ArchetypeBands>(json).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let band = Archetype::new(2.0, 3.0, "x", "");
        assert!(band.contains(2.0));
        assert!(band.contains(3.0));
        assert!(!band.contains(3.0001));
    }
}

//! Industry benchmark tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CatalogError, Dimension, SCORE_CEILING, SCORE_FLOOR};
use crate::domain::foundation::{DimensionId, IndustryKey};

/// Benchmark score per dimension for one industry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionBenchmark(BTreeMap<DimensionId, f64>);

impl DimensionBenchmark {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dimension: DimensionId, value: f64) -> Self {
        self.0.insert(dimension, value);
        self
    }

    pub fn insert(&mut self, dimension: DimensionId, value: f64) {
        self.0.insert(dimension, value);
    }

    pub fn get(&self, dimension: &str) -> Option<f64> {
        self.0.get(dimension).copied()
    }

    /// Benchmark value for a dimension; 0 when the record lacks it.
    ///
    /// Records inside a [`BenchmarkTable`] always define every dimension.
    pub fn score(&self, dimension: &str) -> f64 {
        self.get(dimension).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DimensionId, f64)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(DimensionId, f64)> for DimensionBenchmark {
    fn from_iter<I: IntoIterator<Item = (DimensionId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-industry benchmark records with a generic fallback entry.
///
/// Every record defines exactly the configured dimensions, each in [1, 5].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkTable {
    records: BTreeMap<IndustryKey, DimensionBenchmark>,
    fallback: IndustryKey,
    #[serde(skip)]
    fallback_record: DimensionBenchmark,
}

impl BenchmarkTable {
    pub fn new(
        records: BTreeMap<IndustryKey, DimensionBenchmark>,
        fallback: IndustryKey,
        dimensions: &[Dimension],
    ) -> Result<Self, CatalogError> {
        for (industry, record) in &records {
            for d in dimensions {
                match record.get(d.id.as_str()) {
                    None => {
                        return Err(CatalogError::BenchmarkMissingDimension {
                            industry: industry.to_string(),
                            dimension: d.id.to_string(),
                        })
                    }
                    Some(value) if !(SCORE_FLOOR..=SCORE_CEILING).contains(&value) => {
                        return Err(CatalogError::BenchmarkOutOfRange {
                            industry: industry.to_string(),
                            dimension: d.id.to_string(),
                            value,
                        })
                    }
                    Some(_) => {}
                }
            }
            for (id, _) in record.iter() {
                if !dimensions.iter().any(|d| d.id == *id) {
                    return Err(CatalogError::BenchmarkUnknownDimension {
                        industry: industry.to_string(),
                        dimension: id.to_string(),
                    });
                }
            }
        }

        let fallback_record = records
            .get(fallback.as_str())
            .cloned()
            .ok_or_else(|| CatalogError::MissingFallback {
                table: "benchmark",
                key: fallback.to_string(),
            })?;

        Ok(Self {
            records,
            fallback,
            fallback_record,
        })
    }

    /// Benchmark of an industry, or the fallback record for unknown keys.
    pub fn for_industry(&self, industry: &str) -> &DimensionBenchmark {
        self.records.get(industry).unwrap_or(&self.fallback_record)
    }

    pub fn contains(&self, industry: &str) -> bool {
        self.records.contains_key(industry)
    }

    pub fn fallback_key(&self) -> &IndustryKey {
        &self.fallback
    }

    pub fn records(&self) -> impl Iterator<Item = (&IndustryKey, &DimensionBenchmark)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Typical transformation pace observed among an industry's peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerBenchmark {
    /// Maturity levels gained per year.
    pub velocity: f64,
    pub average_maturity: f64,
    pub insight: String,
}

/// Peer benchmarks keyed by industry with a generic fallback entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerBenchmarkTable {
    records: BTreeMap<IndustryKey, PeerBenchmark>,
    fallback: PeerBenchmark,
}

impl PeerBenchmarkTable {
    pub fn new(
        mut records: BTreeMap<IndustryKey, PeerBenchmark>,
        fallback: &IndustryKey,
    ) -> Result<Self, CatalogError> {
        let fallback = records
            .remove(fallback.as_str())
            .ok_or_else(|| CatalogError::MissingFallback {
                table: "peer benchmark",
                key: fallback.to_string(),
            })?;
        Ok(Self { records, fallback })
    }

    pub fn for_industry(&self, industry: &str) -> &PeerBenchmark {
        self.records.get(industry).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &PeerBenchmark {
        &self.fallback
    }
}

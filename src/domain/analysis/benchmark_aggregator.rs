//! Benchmark Aggregator - cross-industry averages.

use std::collections::BTreeMap;

use crate::domain::assessment::{BenchmarkTable, DimensionBenchmark};
use crate::domain::foundation::DimensionId;

pub struct BenchmarkAggregator;

impl BenchmarkAggregator {
    /// Mean of each dimension across every record in the table.
    ///
    /// The table guarantees every record defines the same dimensions, so
    /// this is a plain reduction.
    pub fn global_average(table: &BenchmarkTable) -> DimensionBenchmark {
        let mut sums: BTreeMap<&DimensionId, (f64, usize)> = BTreeMap::new();
        for (_, record) in table.records() {
            for (dimension, value) in record.iter() {
                let entry = sums.entry(dimension).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }

        sums.into_iter()
            .map(|(dimension, (sum, count))| (dimension.clone(), sum / count as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Dimension;
    use crate::domain::foundation::IndustryKey;

    fn id(s: &str) -> DimensionId {
        DimensionId::new(s).unwrap()
    }

    fn table(rows: &[(&str, f64, f64)]) -> BenchmarkTable {
        let dims = vec![
            Dimension::new(id("d1"), "a", 0.5, ""),
            Dimension::new(id("d2"), "b", 0.5, ""),
        ];
        let records = rows
            .iter()
            .map(|(k, a, b)| {
                (
                    IndustryKey::new(*k).unwrap(),
                    DimensionBenchmark::new().with(id("d1"), *a).with(id("d2"), *b),
                )
            })
            .collect();
        BenchmarkTable::new(records, IndustryKey::new("other").unwrap(), &dims).unwrap()
    }

    #[test]
    fn averages_every_record_including_fallback() {
        let t = table(&[("mining", 3.0, 2.0), ("retail", 4.0, 3.0), ("other", 2.0, 4.0)]);
        let avg = BenchmarkAggregator::global_average(&t);
        assert!((avg.score("d1") - 3.0).abs() < 1e-9);
        assert!((avg.score("d2") - 3.0).abs() < 1e-9);
        assert_eq!(avg.len(), 2);
    }

    #[test]
    fn identical_values_average_to_themselves() {
        let t = table(&[("mining", 3.4, 1.0), ("retail", 3.4, 1.0), ("other", 3.4, 1.0)]);
        let avg = BenchmarkAggregator::global_average(&t);
        assert!((avg.score("d1") - 3.4).abs() < 1e-9);
    }
}

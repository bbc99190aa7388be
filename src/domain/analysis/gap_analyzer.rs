//! Gap Analyzer - user scores against industry and global benchmarks.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{Dimension, DimensionBenchmark, DimensionScores};
use crate::domain::foundation::DimensionId;

/// One dimension singled out by the gap analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionInsight {
    pub dimension: DimensionId,
    pub name: String,
    pub value: f64,
}

/// Largest deficit and largest lead against a benchmark.
///
/// Either side is `None` when the user is never behind (or never ahead).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub biggest_gap: Option<DimensionInsight>,
    pub lead: Option<DimensionInsight>,
}

impl GapAnalysis {
    pub fn biggest_gap_value(&self) -> f64 {
        self.biggest_gap.as_ref().map_or(0.0, |i| i.value)
    }

    pub fn biggest_gap_dimension(&self) -> &str {
        self.biggest_gap.as_ref().map_or("", |i| i.name.as_str())
    }

    pub fn lead_value(&self) -> f64 {
        self.lead.as_ref().map_or(0.0, |i| i.value)
    }

    pub fn lead_dimension(&self) -> &str {
        self.lead.as_ref().map_or("", |i| i.name.as_str())
    }
}

/// A row of the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionComparison {
    pub dimension: DimensionId,
    pub name: String,
    pub user: f64,
    pub industry: f64,
    pub global: f64,
}

/// Signed deficit for one dimension (negative when the user leads).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionGap {
    pub dimension: DimensionId,
    pub name: String,
    pub gap: f64,
}

pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Finds the largest positive gap and the largest positive lead.
    ///
    /// Ties keep the first dimension in configuration order.
    pub fn analyze(
        scores: &DimensionScores,
        benchmark: &DimensionBenchmark,
        dimensions: &[Dimension],
    ) -> GapAnalysis {
        let mut analysis = GapAnalysis::default();

        for d in dimensions {
            let user = scores.rating_or_lowest(d.id.as_str()).as_f64();
            let industry = benchmark.score(d.id.as_str());
            let gap = industry - user;
            let lead = user - industry;

            if gap > analysis.biggest_gap_value() {
                analysis.biggest_gap = Some(Self::insight(d, gap));
            }
            if lead > analysis.lead_value() {
                analysis.lead = Some(Self::insight(d, lead));
            }
        }

        analysis
    }

    /// Per-dimension user, industry and global values in configuration order.
    pub fn compare(
        scores: &DimensionScores,
        industry: &DimensionBenchmark,
        global: &DimensionBenchmark,
        dimensions: &[Dimension],
    ) -> Vec<DimensionComparison> {
        dimensions
            .iter()
            .map(|d| DimensionComparison {
                dimension: d.id.clone(),
                name: d.name.clone(),
                user: scores.rating_or_lowest(d.id.as_str()).as_f64(),
                industry: industry.score(d.id.as_str()),
                global: global.score(d.id.as_str()),
            })
            .collect()
    }

    /// Every dimension ordered by descending gap; ties keep configuration order.
    pub fn ranked_gaps(
        scores: &DimensionScores,
        benchmark: &DimensionBenchmark,
        dimensions: &[Dimension],
    ) -> Vec<DimensionGap> {
        let mut gaps: Vec<DimensionGap> = dimensions
            .iter()
            .map(|d| DimensionGap {
                dimension: d.id.clone(),
                name: d.name.clone(),
                gap: benchmark.score(d.id.as_str()) - scores.rating_or_lowest(d.id.as_str()).as_f64(),
            })
            .collect();
        gaps.sort_by(|a, b| b.gap.total_cmp(&a.gap));
        gaps
    }

    fn insight(dimension: &Dimension, value: f64) -> DimensionInsight {
        DimensionInsight {
            dimension: dimension.id.clone(),
            name: dimension.name.clone(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Rating;

    fn id(s: &str) -> DimensionId {
        DimensionId::new(s).unwrap()
    }

    fn dims() -> Vec<Dimension> {
        vec![
            Dimension::new(id("d1"), "Integrated Operations", 0.4, ""),
            Dimension::new(id("d2"), "Smart Assets", 0.3, ""),
            Dimension::new(id("d3"), "Data Foundation", 0.3, ""),
        ]
    }

    fn scores(a: u8, b: u8, c: u8) -> DimensionScores {
        DimensionScores::new()
            .with(id("d1"), Rating::try_new(a).unwrap())
            .with(id("d2"), Rating::try_new(b).unwrap())
            .with(id("d3"), Rating::try_new(c).unwrap())
    }

    fn bench(a: f64, b: f64, c: f64) -> DimensionBenchmark {
        DimensionBenchmark::new()
            .with(id("d1"), a)
            .with(id("d2"), b)
            .with(id("d3"), c)
    }

    #[test]
    fn equal_scores_report_no_insight() {
        let analysis = GapAnalyzer::analyze(&scores(3, 2, 4), &bench(3.0, 2.0, 4.0), &dims());
        assert_eq!(analysis.biggest_gap_value(), 0.0);
        assert_eq!(analysis.lead_value(), 0.0);
        assert_eq!(analysis.biggest_gap_dimension(), "");
        assert!(analysis.lead.is_none());
    }

    #[test]
    fn finds_largest_gap_and_lead() {
        let analysis = GapAnalyzer::analyze(&scores(2, 5, 3), &bench(3.5, 3.0, 3.2), &dims());
        assert_eq!(analysis.biggest_gap_dimension(), "Integrated Operations");
        assert!((analysis.biggest_gap_value() - 1.5).abs() < 1e-9);
        assert_eq!(analysis.lead_dimension(), "Smart Assets");
        assert!((analysis.lead_value() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_first_dimension() {
        let analysis = GapAnalyzer::analyze(&scores(2, 2, 2), &bench(3.0, 3.0, 3.0), &dims());
        assert_eq!(analysis.biggest_gap_dimension(), "Integrated Operations");
    }

    #[test]
    fn user_always_ahead_reports_no_gap() {
        let analysis = GapAnalyzer::analyze(&scores(5, 5, 5), &bench(3.0, 2.0, 4.0), &dims());
        assert!(analysis.biggest_gap.is_none());
        assert_eq!(analysis.lead_dimension(), "Smart Assets");
    }

    #[test]
    fn unrated_dimensions_count_as_one() {
        let analysis = GapAnalyzer::analyze(&DimensionScores::new(), &bench(1.5, 2.5, 1.0), &dims());
        assert_eq!(analysis.biggest_gap_dimension(), "Smart Assets");
        assert!((analysis.biggest_gap_value() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn ranked_gaps_sort_descending_and_stable() {
        let ranked = GapAnalyzer::ranked_gaps(&scores(2, 3, 2), &bench(3.0, 2.0, 3.0), &dims());
        let names: Vec<_> = ranked.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Integrated Operations", "Data Foundation", "Smart Assets"]);
        assert!((ranked[2].gap + 1.0).abs() < 1e-9);
    }

    #[test]
    fn compare_builds_rows_in_dimension_order() {
        let rows = GapAnalyzer::compare(
            &scores(4, 1, 2),
            &bench(3.0, 2.0, 3.0),
            &bench(2.5, 2.5, 2.5),
            &dims(),
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].user, 4.0);
        assert_eq!(rows[1].industry, 2.0);
        assert_eq!(rows[2].global, 2.5);
    }
}

//! ScoreAssessmentHandler - Query handler producing the assessment score card.
//!
//! Composite score, archetype, benchmark comparison and gap insights are
//! all derived on each call from the submitted ratings.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::analysis::{
    ArchetypeClassifier, BenchmarkAggregator, DimensionComparison, DimensionGap, GapAnalysis,
    GapAnalyzer, MaturityScorer, ScoringError,
};
use crate::domain::assessment::{Archetype, DimensionBenchmark, DimensionScores, UnratedDimensionPolicy};
use crate::domain::foundation::{DimensionId, IndustryKey, MaturityLevel};
use crate::ports::IndustryCatalog;

#[derive(Debug, Clone)]
pub struct ScoreAssessmentQuery {
    pub industry: IndustryKey,
    pub scores: DimensionScores,
}

/// Everything the results step displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub industry: IndustryKey,
    pub score: f64,
    /// Composite rounded to the nearest level.
    pub current_level: MaturityLevel,
    pub archetype: Archetype,
    pub comparisons: Vec<DimensionComparison>,
    pub global_average: DimensionBenchmark,
    pub gaps: GapAnalysis,
    pub ranked_gaps: Vec<DimensionGap>,
    /// Dimensions scored with the default rating.
    pub unrated: Vec<DimensionId>,
}

pub type ScoreAssessmentResult = ScoreCard;

pub struct ScoreAssessmentHandler {
    catalog: Arc<dyn IndustryCatalog>,
    policy: UnratedDimensionPolicy,
}

impl ScoreAssessmentHandler {
    pub fn new(catalog: Arc<dyn IndustryCatalog>, policy: UnratedDimensionPolicy) -> Self {
        Self { catalog, policy }
    }

    pub async fn handle(&self, query: ScoreAssessmentQuery) -> Result<ScoreAssessmentResult, ScoringError> {
        let dimensions = self.catalog.dimensions();
        let score = MaturityScorer::try_compute_score(&query.scores, dimensions, self.policy)?;
        let archetype = ArchetypeClassifier::classify(score, self.catalog.archetypes()).clone();

        let benchmarks = self.catalog.benchmarks();
        let industry = benchmarks.for_industry(query.industry.as_str());
        let global_average = BenchmarkAggregator::global_average(benchmarks);

        let card = ScoreCard {
            score,
            current_level: MaturityLevel::from_score(score),
            archetype,
            comparisons: GapAnalyzer::compare(&query.scores, industry, &global_average, dimensions),
            gaps: GapAnalyzer::analyze(&query.scores, industry, dimensions),
            ranked_gaps: GapAnalyzer::ranked_gaps(&query.scores, industry, dimensions),
            unrated: query.scores.unrated(dimensions).into_iter().cloned().collect(),
            global_average,
            industry: query.industry,
        };

        tracing::debug!(
            industry = %card.industry,
            score = card.score,
            archetype = %card.archetype.label,
            unrated = card.unrated.len(),
            "Assessment scored"
        );

        Ok(card)
    }
}

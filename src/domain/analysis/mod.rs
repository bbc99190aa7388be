//! Analysis Module - Pure domain services for maturity analysis.
//!
//! # Components
//!
//! - `MaturityScorer` - Weighted composite score, clamped to [1, 5]
//! - `ArchetypeClassifier` - Score to maturity band
//! - `BenchmarkAggregator` - Cross-industry averages per dimension
//! - `GapAnalyzer` - Largest deficit and lead against a benchmark
//! - `FeasibilityEngine` - Velocity-based risk and resource tiers
//! - `ReportProjector` - Priority derivation and filtering of report items
//!
//! All functions are pure and stateless. Identical inputs always produce
//! identical outputs.

mod archetype_classifier;
mod benchmark_aggregator;
mod feasibility;
mod gap_analyzer;
mod maturity_scorer;
mod report_projector;

pub use archetype_classifier::ArchetypeClassifier;
pub use benchmark_aggregator::BenchmarkAggregator;
pub use feasibility::{
    CostTier, EffortTier, FeasibilityEngine, FeasibilityProfile, PeerComparison, RiskLevel,
    GAUGE_MAX_VELOCITY, HIGH_VELOCITY_THRESHOLD, MEDIUM_VELOCITY_THRESHOLD,
};
pub use gap_analyzer::{DimensionComparison, DimensionGap, DimensionInsight, GapAnalysis, GapAnalyzer};
pub use maturity_scorer::{MaturityScorer, ScoringError};
pub use report_projector::{
    Prioritized, PriorityBadge, PriorityFilter, PriorityLinked, ProjectedReport, ReportProjector,
};

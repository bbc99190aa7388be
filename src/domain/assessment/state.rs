//! Assessment session state.
//!
//! Holds only user input. Composite score, archetype, benchmarks and
//! feasibility are recomputed from these fields on every read.

use serde::{Deserialize, Serialize};

use super::{Dimension, DimensionScores, PriorityMap};
use crate::domain::analysis::MaturityScorer;
use crate::domain::foundation::{AreaId, DimensionId, IndustryKey, MaturityLevel, Rating, TimelineMonths};
use crate::domain::report::StrategicReport;

/// Everything the user has entered during one assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    pub industry: Option<IndustryKey>,
    pub scores: DimensionScores,
    pub current_level: Option<MaturityLevel>,
    pub target_level: Option<MaturityLevel>,
    pub timeline: TimelineMonths,
    pub priorities: PriorityMap,
    pub report: Option<StrategicReport>,
}

impl Assessment {
    /// Begins a fresh assessment for an industry.
    pub fn start(industry: IndustryKey) -> Self {
        Self {
            industry: Some(industry),
            ..Self::default()
        }
    }

    pub fn rate_dimension(&mut self, dimension: DimensionId, rating: Rating) {
        self.scores.rate(dimension, rating);
    }

    /// Rates every dimension at the chosen level and adopts it as current.
    pub fn apply_level_preset(&mut self, level: MaturityLevel, dimensions: &[Dimension]) {
        self.scores = DimensionScores::uniform(level, dimensions);
        self.current_level = Some(level);
    }

    /// Sets the current level to the rounded composite score.
    pub fn sync_current_level(&mut self, dimensions: &[Dimension]) -> MaturityLevel {
        let score = MaturityScorer::compute_score(&self.scores, dimensions);
        let level = MaturityLevel::from_score(score);
        self.current_level = Some(level);
        level
    }

    pub fn rate_area(&mut self, area: AreaId, rating: Rating) {
        self.priorities.rate(area, rating);
    }

    pub fn set_target_level(&mut self, level: MaturityLevel) {
        self.target_level = Some(level);
    }

    pub fn set_timeline(&mut self, timeline: TimelineMonths) {
        self.timeline = timeline;
    }

    /// The chosen target, or two levels above current when none was chosen.
    pub fn target_level_or_default(&self) -> MaturityLevel {
        self.target_level
            .unwrap_or_else(|| MaturityLevel::default_target(self.current_level.unwrap_or_default()))
    }

    pub fn attach_report(&mut self, report: StrategicReport) {
        self.report = Some(report);
    }

    /// Discards all input and returns to the empty initial state.
    pub fn restart(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> Vec<Dimension> {
        vec![
            Dimension::new(DimensionId::new("d1").unwrap(), "Ops", 0.6, ""),
            Dimension::new(DimensionId::new("d2").unwrap(), "Data", 0.4, ""),
        ]
    }

    fn rating(v: u8) -> Rating {
        Rating::try_new(v).unwrap()
    }

    #[test]
    fn start_creates_empty_session_for_industry() {
        let a = Assessment::start(IndustryKey::new("mining").unwrap());
        assert_eq!(a.industry.as_ref().map(|k| k.as_str()), Some("mining"));
        assert!(a.scores.is_empty());
        assert!(a.priorities.is_empty());
        assert_eq!(a.timeline.months(), 12);
    }

    #[test]
    fn level_preset_rates_all_dimensions() {
        let mut a = Assessment::default();
        a.apply_level_preset(MaturityLevel::Managed, &dims());
        assert_eq!(a.scores.get("d1"), Some(rating(3)));
        assert_eq!(a.scores.get("d2"), Some(rating(3)));
        assert_eq!(a.current_level, Some(MaturityLevel::Managed));
    }

    #[test]
    fn sync_current_level_rounds_composite() {
        let mut a = Assessment::default();
        a.rate_dimension(DimensionId::new("d1").unwrap(), rating(4));
        a.rate_dimension(DimensionId::new("d2").unwrap(), rating(2));
        // 4 * 0.6 + 2 * 0.4 = 3.2
        assert_eq!(a.sync_current_level(&dims()), MaturityLevel::Managed);
        assert_eq!(a.current_level, Some(MaturityLevel::Managed));
    }

    #[test]
    fn target_defaults_to_two_levels_above_current() {
        let mut a = Assessment::default();
        a.current_level = Some(MaturityLevel::Defined);
        assert_eq!(a.target_level_or_default(), MaturityLevel::Measured);

        a.current_level = Some(MaturityLevel::Measured);
        assert_eq!(a.target_level_or_default(), MaturityLevel::Optimized);

        a.set_target_level(MaturityLevel::Managed);
        assert_eq!(a.target_level_or_default(), MaturityLevel::Managed);
    }

    #[test]
    fn restart_clears_everything() {
        let mut a = Assessment::start(IndustryKey::new("retail").unwrap());
        a.rate_area(AreaId::new("ops").unwrap(), rating(5));
        a.set_timeline(TimelineMonths::try_new(24).unwrap());
        a.restart();
        assert_eq!(a, Assessment::default());
    }
}

//! EvaluateFeasibilityHandler - Query handler for the target-setting step.
//!
//! Combines the velocity-based feasibility profile with the industry's peer
//! pace and the level descriptions for current and target.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::analysis::{FeasibilityEngine, FeasibilityProfile, PeerComparison};
use crate::domain::assessment::LevelDescription;
use crate::domain::foundation::{IndustryKey, MaturityLevel, TimelineMonths};
use crate::ports::IndustryCatalog;

#[derive(Debug, Clone)]
pub struct EvaluateFeasibilityQuery {
    pub industry: IndustryKey,
    pub current_level: MaturityLevel,
    /// Defaults to two levels above current, capped at the top level.
    pub target_level: Option<MaturityLevel>,
    pub timeline: TimelineMonths,
}

/// Display strings for the profile's risk band and resource tiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub label: &'static str,
    pub description: &'static str,
    pub implication: &'static str,
    pub cost: &'static str,
    pub cost_symbol: &'static str,
    pub effort: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityReport {
    pub current: LevelDescription,
    pub target: LevelDescription,
    pub timeline_months: u16,
    pub profile: FeasibilityProfile,
    pub risk: RiskSummary,
    pub gauge_percent: f64,
    pub peers: PeerComparison,
}

pub type EvaluateFeasibilityResult = FeasibilityReport;

pub struct EvaluateFeasibilityHandler {
    catalog: Arc<dyn IndustryCatalog>,
}

impl EvaluateFeasibilityHandler {
    pub fn new(catalog: Arc<dyn IndustryCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: EvaluateFeasibilityQuery) -> EvaluateFeasibilityResult {
        let target_level = query
            .target_level
            .unwrap_or_else(|| MaturityLevel::default_target(query.current_level));
        let industry = query.industry.as_str();
        let config = self.catalog.industry_config(industry);

        let profile = FeasibilityEngine::compute(query.current_level, target_level, query.timeline);
        let peers = FeasibilityEngine::compare_to_peers(&profile, self.catalog.peer_benchmark(industry));

        let risk_level = profile.risk_level;
        let cost = profile.cost_tier;
        let risk = RiskSummary {
            label: risk_level.label(),
            description: risk_level.description(),
            implication: risk_level.implication(),
            cost: cost.label(),
            cost_symbol: cost.symbol(),
            effort: profile.effort_tier.label(),
        };

        tracing::debug!(
            industry = %industry,
            current = query.current_level.value(),
            target = target_level.value(),
            months = query.timeline.months(),
            velocity = profile.velocity,
            risk = risk.label,
            "Feasibility evaluated"
        );

        FeasibilityReport {
            current: config.describe(query.current_level),
            target: config.describe(target_level),
            timeline_months: query.timeline.months(),
            gauge_percent: profile.gauge_percent(),
            profile,
            risk,
            peers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::StaticIndustryCatalog;
    use crate::domain::analysis::RiskLevel;
    use crate::domain::assessment::WeightPolicy;

    fn handler() -> EvaluateFeasibilityHandler {
        EvaluateFeasibilityHandler::new(Arc::new(
            StaticIndustryCatalog::embedded(WeightPolicy::Reject).unwrap(),
        ))
    }

    fn query(current: u8, target: Option<u8>, months: u16) -> EvaluateFeasibilityQuery {
        EvaluateFeasibilityQuery {
            industry: IndustryKey::new("mining").unwrap(),
            current_level: MaturityLevel::try_from_u8(current).unwrap(),
            target_level: target.map(|t| MaturityLevel::try_from_u8(t).unwrap()),
            timeline: TimelineMonths::try_new(months).unwrap(),
        }
    }

    #[tokio::test]
    async fn aggressive_plan_outpaces_peers() {
        let report = handler().handle(query(1, Some(5), 12)).await;
        assert_eq!(report.profile.risk_level, RiskLevel::High);
        assert_eq!(report.risk.label, "Aggressive");
        assert_eq!(report.gauge_percent, 100.0);
        assert!(report.peers.outpacing_peers);
        assert_eq!(report.target.level, MaturityLevel::Optimized);
    }

    #[tokio::test]
    async fn missing_target_defaults_two_levels_up() {
        let report = handler().handle(query(2, None, 24)).await;
        assert_eq!(report.target.level, MaturityLevel::Measured);
        assert_eq!(report.profile.risk_level, RiskLevel::Medium);
    }

    #[tokio::test]
    async fn downgrade_requires_no_change() {
        let report = handler().handle(query(4, Some(2), 12)).await;
        assert_eq!(report.profile.risk_level, RiskLevel::None);
        assert_eq!(report.profile.velocity, 0.0);
        assert_eq!(report.gauge_percent, 0.0);
        assert!(!report.peers.outpacing_peers);
    }
}

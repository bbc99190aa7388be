//! Feasibility Engine - velocity-based risk classification.
//!
//! Converts a maturity gap and a timeline into the pace of change it
//! demands, then classifies that pace into a risk band and resource tier.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::PeerBenchmark;
use crate::domain::foundation::{MaturityLevel, TimelineMonths};

/// Velocity above which a plan is aggressive (levels per year).
pub const HIGH_VELOCITY_THRESHOLD: f64 = 1.3;
/// Velocity above which a plan is balanced (levels per year).
pub const MEDIUM_VELOCITY_THRESHOLD: f64 = 0.7;
/// Velocity shown as a full gauge.
pub const GAUGE_MAX_VELOCITY: f64 = 2.0;

/// Risk of failing to reach the target in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classifies a positive velocity. Upper bounds are inclusive.
    pub fn from_velocity(velocity: f64) -> Self {
        if velocity > HIGH_VELOCITY_THRESHOLD {
            RiskLevel::High
        } else if velocity > MEDIUM_VELOCITY_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::None => "No Change",
            RiskLevel::Low => "Conservative",
            RiskLevel::Medium => "Balanced",
            RiskLevel::High => "Aggressive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::None => "Target level must be higher.",
            RiskLevel::Low => "Below industry average velocity (<0.7 levels/year).",
            RiskLevel::Medium => "Aligned with typical benchmarks.",
            RiskLevel::High => "Exceeds standard industry velocity.",
        }
    }

    pub fn implication(&self) -> &'static str {
        match self {
            RiskLevel::None => "Maintain current operations.",
            RiskLevel::Low => "Can be achieved with existing resources.",
            RiskLevel::Medium => "Achievable with focused effort.",
            RiskLevel::High => "High risk of failure without dedicated office.",
        }
    }

    pub fn cost_tier(&self) -> CostTier {
        match self {
            RiskLevel::None => CostTier::None,
            RiskLevel::Low => CostTier::LowOpex,
            RiskLevel::Medium => CostTier::MedOpex,
            RiskLevel::High => CostTier::HighCapex,
        }
    }

    pub fn effort_tier(&self) -> EffortTier {
        match self {
            RiskLevel::None => EffortTier::None,
            RiskLevel::Low => EffortTier::PartTime,
            RiskLevel::Medium => EffortTier::DedicatedTeam,
            RiskLevel::High => EffortTier::TransformationOffice,
        }
    }
}

/// Expected spend profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    None,
    LowOpex,
    MedOpex,
    HighCapex,
}

impl CostTier {
    pub fn label(&self) -> &'static str {
        match self {
            CostTier::None => "None",
            CostTier::LowOpex => "Low Opex",
            CostTier::MedOpex => "Med Opex",
            CostTier::HighCapex => "High Capex",
        }
    }

    /// Relative magnitude as dollar signs.
    pub fn symbol(&self) -> &'static str {
        match self {
            CostTier::None => "",
            CostTier::LowOpex => "$",
            CostTier::MedOpex => "$$",
            CostTier::HighCapex => "$$$",
        }
    }
}

/// Expected staffing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortTier {
    None,
    PartTime,
    DedicatedTeam,
    TransformationOffice,
}

impl EffortTier {
    pub fn label(&self) -> &'static str {
        match self {
            EffortTier::None => "None",
            EffortTier::PartTime => "Part-time",
            EffortTier::DedicatedTeam => "Dedicated Team",
            EffortTier::TransformationOffice => "Transformation Office",
        }
    }
}

/// Derived feasibility of moving from one level to another in a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityProfile {
    /// Levels to climb; 0 when the target is not above current.
    pub gap: u8,
    pub years: f64,
    /// Levels per year.
    pub velocity: f64,
    pub risk_level: RiskLevel,
    pub cost_tier: CostTier,
    pub effort_tier: EffortTier,
}

impl FeasibilityProfile {
    /// Velocity as a share of the gauge, 0..=100.
    pub fn gauge_percent(&self) -> f64 {
        self.velocity.clamp(0.0, GAUGE_MAX_VELOCITY) / GAUGE_MAX_VELOCITY * 100.0
    }

    pub fn requires_change(&self) -> bool {
        self.risk_level != RiskLevel::None
    }
}

/// Pace relative to industry peers. Informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerComparison {
    pub outpacing_peers: bool,
    pub peer_velocity: f64,
    pub insight: String,
}

pub struct FeasibilityEngine;

impl FeasibilityEngine {
    /// Classifies the plan of reaching `target` from `current` within `timeline`.
    ///
    /// # Edge Cases
    /// - Target at or below current: risk `None`, velocity 0
    pub fn compute(
        current: MaturityLevel,
        target: MaturityLevel,
        timeline: TimelineMonths,
    ) -> FeasibilityProfile {
        let gap = current.levels_to(target);
        let years = timeline.years();

        if gap <= 0 {
            return FeasibilityProfile {
                gap: 0,
                years,
                velocity: 0.0,
                risk_level: RiskLevel::None,
                cost_tier: CostTier::None,
                effort_tier: EffortTier::None,
            };
        }

        let velocity = f64::from(gap) / years;
        let risk_level = RiskLevel::from_velocity(velocity);

        FeasibilityProfile {
            gap: gap.unsigned_abs(),
            years,
            velocity,
            risk_level,
            cost_tier: risk_level.cost_tier(),
            effort_tier: risk_level.effort_tier(),
        }
    }

    /// Compares the required pace against the industry's peers.
    pub fn compare_to_peers(profile: &FeasibilityProfile, peer: &PeerBenchmark) -> PeerComparison {
        PeerComparison {
            outpacing_peers: profile.velocity > peer.velocity,
            peer_velocity: peer.velocity,
            insight: peer.insight.clone(),
        }
    }
}

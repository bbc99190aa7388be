//! Strategic report produced by the external generator.

mod strategic_report;

pub use strategic_report::{
    ActionType, Challenge, KeyTrend, ResponsibleAi, RiskAssessment, RoadmapPhase,
    StrategicAction, StrategicReport,
};

#[cfg(test)]
pub(crate) use strategic_report::tests::sample_report_json;

//! Strongly typed shape of the generated strategic report.
//!
//! Field names are camelCase on the wire to match the generator's JSON.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AreaId;

/// Consultant-style report produced by the report generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicReport {
    pub executive_summary: String,
    pub key_trends: Vec<KeyTrend>,
    pub top_challenges: Vec<Challenge>,
    pub strategic_actions: Vec<StrategicAction>,
    pub roadmap: Vec<RoadmapPhase>,
    pub risk_assessment: RiskAssessment,
    #[serde(rename = "responsibleAI")]
    pub responsible_ai: ResponsibleAi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTrend {
    pub trend: String,
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub challenge: String,
    pub description: String,
    /// 0..=100
    pub severity: u8,
}

/// Which lever an action pulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    People,
    Process,
    Technology,
    Strategy,
}

impl ActionType {
    pub const ALL: [ActionType; 4] = [
        ActionType::People,
        ActionType::Process,
        ActionType::Technology,
        ActionType::Strategy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::People => "People",
            ActionType::Process => "Process",
            ActionType::Technology => "Technology",
            ActionType::Strategy => "Strategy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicAction {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub key_steps: Vec<String>,
    #[serde(default)]
    pub related_area_ids: Vec<AreaId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub phase_name: String,
    pub duration: String,
    pub focus: String,
    pub key_deliverables: Vec<String>,
    #[serde(default)]
    pub related_area_ids: Vec<AreaId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub probability: String,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibleAi {
    pub potential_biases: Vec<String>,
    pub mitigation_strategies: Vec<String>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_report_json() -> serde_json::Value {
        serde_json::json!({
            "executiveSummary": "Operations are stable but data remains siloed.",
            "keyTrends": [
                {"trend": "Autonomous haulage", "impact": "Lower cost per tonne", "icon": "truck"}
            ],
            "topChallenges": [
                {"challenge": "Legacy OT", "description": "Closed protocols", "severity": 80}
            ],
            "strategicActions": [
                {
                    "title": "Unify the data platform",
                    "description": "Single source of truth",
                    "type": "Technology",
                    "keySteps": ["Inventory sources", "Select platform"],
                    "relatedAreaIds": ["data_gov"]
                },
                {
                    "title": "Upskill supervisors",
                    "description": "Digital literacy",
                    "type": "People",
                    "keySteps": ["Assess skills"]
                }
            ],
            "roadmap": [
                {
                    "phaseName": "Foundation",
                    "duration": "Months 1-4",
                    "focus": "Data",
                    "keyDeliverables": ["Data catalogue"],
                    "relatedAreaIds": ["data_gov", "ops_efficiency"]
                }
            ],
            "riskAssessment": {"probability": "Medium", "riskFactors": ["Change fatigue"]},
            "responsibleAI": {
                "potentialBiases": ["Survivorship in benchmarks"],
                "mitigationStrategies": ["Human review"]
            }
        })
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let report: StrategicReport = serde_json::from_value(sample_report_json()).unwrap();
        assert_eq!(report.strategic_actions.len(), 2);
        assert_eq!(report.strategic_actions[0].action_type, ActionType::Technology);
        assert_eq!(report.strategic_actions[0].related_area_ids[0].as_str(), "data_gov");
        assert!(report.strategic_actions[1].related_area_ids.is_empty());
        assert_eq!(report.responsible_ai.mitigation_strategies, vec!["Human review"]);
    }

    #[test]
    fn serializes_back_to_wire_names() {
        let report: StrategicReport = serde_json::from_value(sample_report_json()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("responsibleAI").is_some());
        assert_eq!(value["strategicActions"][0]["type"], "Technology");
        assert_eq!(value["roadmap"][0]["phaseName"], "Foundation");
    }

    #[test]
    fn rejects_unknown_action_type() {
        let mut json = sample_report_json();
        json["strategicActions"][0]["type"] = "Magic".into();
        assert!(serde_json::from_value::<StrategicReport>(json).is_err());
    }
}

//! Request DTOs for the report endpoints.
//!
//! `POST /api/reports` takes the assessment state itself as its body.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::PriorityFilter;
use crate::domain::assessment::PriorityMap;

/// Body of `POST /api/reports/project`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectReportRequest {
    /// Raw report document; schema-checked before it is read.
    pub report: serde_json::Value,
    #[serde(default)]
    pub priorities: PriorityMap,
    #[serde(default)]
    pub filter: PriorityFilter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::sample_report_json;

    #[test]
    fn filter_defaults_to_all() {
        let body = serde_json::json!({ "report": sample_report_json() });
        let req: ProjectReportRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.filter, PriorityFilter::All);
        assert!(req.priorities.is_empty());
    }

    #[test]
    fn parses_filter_and_priorities() {
        let body = serde_json::json!({
            "report": sample_report_json(),
            "priorities": {"data_gov": 5},
            "filter": "critical"
        });
        let req: ProjectReportRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.filter, PriorityFilter::Critical);
        assert_eq!(req.priorities.priority_of("data_gov"), 5);
    }
}

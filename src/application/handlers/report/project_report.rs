//! ProjectReportHandler - Query handler filtering a report by user priorities.
//!
//! The report arrives from the client as raw JSON. It is checked against the
//! report schema before it is deserialized and handed to the projector.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::domain::analysis::{PriorityFilter, ProjectedReport, ReportProjector};
use crate::domain::assessment::PriorityMap;
use crate::domain::foundation::ErrorCode;
use crate::domain::report::StrategicReport;
use crate::ports::{ReportSchemaValidator, SchemaValidationError};

#[derive(Debug, Clone)]
pub struct ProjectReportQuery {
    /// Untrusted report document.
    pub report: Value,
    pub priorities: PriorityMap,
    pub filter: PriorityFilter,
}

pub type ProjectReportResult = ProjectedReport;

#[derive(Debug, Clone, Error)]
pub enum ProjectReportError {
    #[error("Report failed schema validation: {0}")]
    Invalid(#[from] SchemaValidationError),

    #[error("Report could not be read: {0}")]
    Malformed(String),
}

impl ProjectReportError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidReport
    }

    /// Message safe to return to clients.
    pub fn to_client_message(&self) -> String {
        match self {
            ProjectReportError::Invalid(e) => e.to_client_message(),
            ProjectReportError::Malformed(_) => "Report does not match the expected shape".to_string(),
        }
    }
}

pub struct ProjectReportHandler {
    validator: Arc<dyn ReportSchemaValidator>,
}

impl ProjectReportHandler {
    pub fn new(validator: Arc<dyn ReportSchemaValidator>) -> Self {
        Self { validator }
    }

    pub async fn handle(&self, query: ProjectReportQuery) -> Result<ProjectReportResult, ProjectReportError> {
        if let Err(e) = self.validator.validate(&query.report) {
            tracing::debug!(errors = e.error_count(), "Rejected report for projection");
            return Err(e.into());
        }
        let report: StrategicReport =
            serde_json::from_value(query.report).map_err(|e| ProjectReportError::Malformed(e.to_string()))?;

        let projected = ReportProjector::project(&report, &query.priorities, query.filter);
        tracing::debug!(
            filter = ?query.filter,
            actions = projected.actions.len(),
            phases = projected.roadmap.len(),
            "Report projected"
        );
        Ok(projected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::validation::JsonReportValidator;
    use crate::domain::analysis::PriorityBadge;
    use crate::domain::foundation::{AreaId, Rating};
    use crate::domain::report::sample_report_json;

    fn handler() -> ProjectReportHandler {
        ProjectReportHandler::new(Arc::new(JsonReportValidator::new()))
    }

    fn query_for(report: Value, filter: PriorityFilter) -> ProjectReportQuery {
        ProjectReportQuery {
            report,
            priorities: PriorityMap::new()
                .with(AreaId::new("data_gov").unwrap(), Rating::try_new(5).unwrap()),
            filter,
        }
    }

    fn query(filter: PriorityFilter) -> ProjectReportQuery {
        query_for(sample_report_json(), filter)
    }

    #[tokio::test]
    async fn all_keeps_everything_in_order() {
        let projected = handler().handle(query(PriorityFilter::All)).await.unwrap();
        let titles: Vec<&str> = projected.actions.iter().map(|a| a.item.title.as_str()).collect();
        assert_eq!(titles, vec!["Unify the data platform", "Upskill supervisors"]);
        assert_eq!(projected.actions[1].badge, PriorityBadge::Unrated);
    }

    #[tokio::test]
    async fn critical_applies_to_actions_and_roadmap_alike() {
        let projected = handler().handle(query(PriorityFilter::Critical)).await.unwrap();
        assert_eq!(projected.actions.len(), 1);
        assert_eq!(projected.actions[0].priority, 5);
        assert_eq!(projected.roadmap.len(), 1);
        assert_eq!(projected.roadmap[0].badge, PriorityBadge::Critical);
    }

    #[tokio::test]
    async fn severity_above_one_hundred_is_rejected() {
        let mut report = sample_report_json();
        report["topChallenges"][0]["severity"] = 250.into();

        let err = handler()
            .handle(query_for(report, PriorityFilter::All))
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectReportError::Invalid(_)));
        assert_eq!(err.code(), ErrorCode::InvalidReport);
        assert!(err.to_client_message().contains("severity"));
    }

    #[tokio::test]
    async fn missing_section_is_rejected_before_projection() {
        let mut report = sample_report_json();
        report.as_object_mut().unwrap().remove("roadmap");

        let err = handler()
            .handle(query_for(report, PriorityFilter::All))
            .await
            .unwrap_err();

        assert_eq!(err.to_client_message(), "Missing required field: roadmap");
    }
}

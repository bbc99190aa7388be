//! HTTP handlers for report endpoints.

use axum::extract::{Json, State};
use serde_json::Value;

use crate::adapters::http::error::{ApiJson, AssessmentApiError};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GenerateReportCommand, ProjectReportQuery};
use crate::domain::analysis::ProjectedReport;
use crate::domain::assessment::Assessment;

use super::dto::ProjectReportRequest;

/// POST /api/reports
///
/// Generates the strategic report and returns the assessment with the
/// report attached.
pub async fn generate_report(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<Assessment>, AssessmentApiError> {
    let assessment = assessment_from_body(&state, body)?;
    let assessment = state
        .generate_report_handler()
        .handle(GenerateReportCommand { assessment })
        .await?;
    Ok(Json(assessment))
}

/// POST /api/reports/project
pub async fn project_report(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProjectReportRequest>,
) -> Result<Json<ProjectedReport>, AssessmentApiError> {
    let projected = state
        .project_report_handler()
        .handle(ProjectReportQuery {
            report: req.report,
            priorities: req.priorities,
            filter: req.filter,
        })
        .await?;
    Ok(Json(projected))
}

/// Reads an assessment body, schema-checking any report it already carries.
fn assessment_from_body(state: &AppState, body: Value) -> Result<Assessment, AssessmentApiError> {
    if let Some(report) = body.get("report").filter(|r| !r.is_null()) {
        state.report_validator.validate(report)?;
    }
    serde_json::from_value(body).map_err(|e| AssessmentApiError::BadRequest(e.to_string()))
}

//! HTTP handlers for catalog and assessment endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use axum::extract::{Json, Path, State};

use crate::adapters::http::error::{ApiJson, AssessmentApiError};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    EvaluateFeasibilityQuery, FeasibilityReport, GetIndustryConfigQuery, IndustryConfigView,
    ListIndustriesQuery, ListTimelineOptionsQuery, ScoreAssessmentQuery, ScoreCard,
};
use crate::domain::foundation::{IndustryKey, TimelineMonths};

use super::dto::{FeasibilityRequest, IndustryListResponse, ScoreRequest, TimelineListResponse};

/// GET /api/industries
pub async fn list_industries(State(state): State<AppState>) -> Json<IndustryListResponse> {
    let industries = state.list_industries_handler().handle(ListIndustriesQuery).await;
    Json(IndustryListResponse { industries })
}

/// GET /api/industries/:industry/config
///
/// Unknown industries receive the generic configuration.
pub async fn get_industry_config(
    State(state): State<AppState>,
    Path(industry): Path<String>,
) -> Result<Json<IndustryConfigView>, AssessmentApiError> {
    let industry = IndustryKey::new(industry)?;
    let view = state
        .get_industry_config_handler()
        .handle(GetIndustryConfigQuery { industry })
        .await;
    Ok(Json(view))
}

/// GET /api/timelines
pub async fn list_timelines(State(state): State<AppState>) -> Json<TimelineListResponse> {
    let options = state
        .list_timeline_options_handler()
        .handle(ListTimelineOptionsQuery)
        .await;
    Json(TimelineListResponse {
        options,
        default_months: TimelineMonths::STANDARD.months(),
    })
}

/// POST /api/assessment/score
pub async fn score_assessment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ScoreRequest>,
) -> Result<Json<ScoreCard>, AssessmentApiError> {
    let card = state
        .score_assessment_handler()
        .handle(ScoreAssessmentQuery {
            industry: req.industry,
            scores: req.scores,
        })
        .await?;
    Ok(Json(card))
}

/// POST /api/assessment/feasibility
pub async fn evaluate_feasibility(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<FeasibilityRequest>,
) -> Json<FeasibilityReport> {
    let report = state
        .evaluate_feasibility_handler()
        .handle(EvaluateFeasibilityQuery {
            industry: req.industry,
            current_level: req.current_level,
            target_level: req.target_level,
            timeline: req.timeline_months,
        })
        .await;
    Json(report)
}

//! HTTP routes for catalog and assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    evaluate_feasibility, get_industry_config, list_industries, list_timelines, score_assessment,
};
use crate::adapters::http::state::AppState;

/// Creates the assessment router.
pub fn assessment_routes() -> Router<AppState> {
    Router::new()
        // GET /api/industries
        .route("/api/industries", get(list_industries))
        // GET /api/industries/:industry/config
        .route("/api/industries/:industry/config", get(get_industry_config))
        // GET /api/timelines
        .route("/api/timelines", get(list_timelines))
        // POST /api/assessment/score
        .route("/api/assessment/score", post(score_assessment))
        // POST /api/assessment/feasibility
        .route("/api/assessment/feasibility", post(evaluate_feasibility))
}

//! HTTP routes for report endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{generate_report, project_report};
use crate::adapters::http::state::AppState;

/// Creates the report router.
pub fn report_routes() -> Router<AppState> {
    Router::new()
        // POST /api/reports
        .route("/api/reports", post(generate_report))
        // POST /api/reports/project
        .route("/api/reports/project", post(project_report))
}

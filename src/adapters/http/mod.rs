//! HTTP adapters - REST API implementations.
//!
//! - `assessment` - catalog lookups, scoring and feasibility
//! - `report` - report generation and priority projection

pub mod assessment;
pub mod dto;
pub mod error;
pub mod report;
pub mod state;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use assessment::assessment_routes;
pub use dto::{ErrorResponse, HealthResponse};
pub use error::{ApiJson, AssessmentApiError};
pub use report::report_routes;
pub use state::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Creates the full API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(assessment_routes())
        .merge(report_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the given origins; any origin when the list is empty.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

//! API error type and JSON body extraction.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Request};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use super::dto::ErrorResponse;
use crate::application::{GenerateReportError, ProjectReportError};
use crate::domain::analysis::ScoringError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::{AIError, ReportGenerationError, SchemaValidationError};

/// Error returned by the assessment and report endpoints.
#[derive(Debug)]
pub enum AssessmentApiError {
    /// Malformed or out-of-range input (400).
    BadRequest(String),
    /// Well-formed input that is not yet complete enough to act on (422).
    Unprocessable(ErrorResponse),
    /// Upstream AI quota exhausted (429).
    RateLimited { message: String, retry_after_secs: u32 },
    /// Upstream AI failure or unusable report (502).
    BadGateway(ErrorResponse),
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> Response {
        match self {
            AssessmentApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(msg))).into_response()
            }
            AssessmentApiError::Unprocessable(body) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            AssessmentApiError::RateLimited {
                message,
                retry_after_secs,
            } => {
                let mut response = (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(ErrorResponse::new(ErrorCode::RateLimited, message)),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
                response
            }
            AssessmentApiError::BadGateway(body) => (StatusCode::BAD_GATEWAY, Json(body)).into_response(),
        }
    }
}

impl From<ValidationError> for AssessmentApiError {
    fn from(error: ValidationError) -> Self {
        AssessmentApiError::BadRequest(error.to_string())
    }
}

impl From<ScoringError> for AssessmentApiError {
    fn from(error: ScoringError) -> Self {
        let message = error.to_string();
        match error {
            ScoringError::UnratedDimensions(ids) => AssessmentApiError::Unprocessable(
                ErrorResponse::new(ErrorCode::UnratedDimensions, message)
                    .with_details(serde_json::json!({ "dimensions": ids })),
            ),
        }
    }
}

/// A report supplied by the client that fails the schema check.
impl From<SchemaValidationError> for AssessmentApiError {
    fn from(error: SchemaValidationError) -> Self {
        AssessmentApiError::Unprocessable(
            ErrorResponse::new(ErrorCode::InvalidReport, error.to_client_message())
                .with_details(serde_json::json!({ "errors": error.error_count() })),
        )
    }
}

impl From<ProjectReportError> for AssessmentApiError {
    fn from(error: ProjectReportError) -> Self {
        match error {
            ProjectReportError::Invalid(e) => e.into(),
            malformed @ ProjectReportError::Malformed(_) => AssessmentApiError::Unprocessable(
                ErrorResponse::new(malformed.code(), malformed.to_client_message()),
            ),
        }
    }
}

impl From<GenerateReportError> for AssessmentApiError {
    fn from(error: GenerateReportError) -> Self {
        let code = error.code();
        match error {
            GenerateReportError::Incomplete(field) => AssessmentApiError::Unprocessable(
                ErrorResponse::new(code, format!("Assessment is incomplete: {} not set", field))
                    .with_details(serde_json::json!({ "field": field })),
            ),
            GenerateReportError::Generation(e) => {
                tracing::warn!(error = %e, code = %code, "Report generation failed");
                let message = e.to_client_message();
                match e {
                    ReportGenerationError::Provider(AIError::RateLimited { retry_after_secs }) => {
                        AssessmentApiError::RateLimited {
                            message,
                            retry_after_secs,
                        }
                    }
                    _ => AssessmentApiError::BadGateway(ErrorResponse::new(code, message)),
                }
            }
        }
    }
}

/// JSON body extractor whose rejections use the API error body.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AssessmentApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| ApiJson(value))
            .map_err(|rejection| AssessmentApiError::BadRequest(rejection.body_text()))
    }
}

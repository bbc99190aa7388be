//! Report Generator Port - produces the strategic report for an assessment.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AIError, SchemaValidationError};
use crate::domain::assessment::LevelDescription;
use crate::domain::foundation::{AreaId, MaturityLevel, Rating, TimelineMonths};
use crate::domain::report::StrategicReport;

/// Port for generating a strategic report.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(&self, context: ReportContext) -> Result<StrategicReport, ReportGenerationError>;
}

/// Everything the generator needs to know about the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContext {
    pub industry: String,
    pub current_level: LevelDescription,
    pub target_level: LevelDescription,
    pub timeline: TimelineMonths,
    pub rated_areas: Vec<RatedArea>,
}

/// An assessment area together with the user's priority for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedArea {
    pub id: AreaId,
    pub title: String,
    pub priority: Rating,
    pub required_level: MaturityLevel,
}

#[derive(Debug, Clone, Error)]
pub enum ReportGenerationError {
    #[error("AI provider error: {0}")]
    Provider(#[from] AIError),

    #[error("Generated report failed validation: {0}")]
    InvalidReport(#[from] SchemaValidationError),

    #[error("Generated report is not valid JSON: {0}")]
    Malformed(String),
}

impl ReportGenerationError {
    /// Message safe to return to clients.
    pub fn to_client_message(&self) -> String {
        match self {
            ReportGenerationError::Provider(AIError::RateLimited { .. }) => {
                "Report service is busy, please retry shortly".to_string()
            }
            ReportGenerationError::Provider(_) => "Report service is unavailable".to_string(),
            ReportGenerationError::InvalidReport(e) => e.to_client_message(),
            ReportGenerationError::Malformed(_) => "Report service returned an unreadable report".to_string(),
        }
    }
}

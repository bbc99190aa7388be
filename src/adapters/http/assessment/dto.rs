//! Request and response DTOs for the assessment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{DimensionScores, Industry, TimelineOption};
use crate::domain::foundation::{IndustryKey, MaturityLevel, TimelineMonths};

/// Body of `POST /api/assessment/score`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreRequest {
    pub industry: IndustryKey,
    #[serde(default)]
    pub scores: DimensionScores,
}

/// Body of `POST /api/assessment/feasibility`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeasibilityRequest {
    pub industry: IndustryKey,
    pub current_level: MaturityLevel,
    #[serde(default)]
    pub target_level: Option<MaturityLevel>,
    #[serde(default)]
    pub timeline_months: TimelineMonths,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryListResponse {
    pub industries: Vec<Industry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineListResponse {
    pub options: Vec<TimelineOption>,
    pub default_months: u16,
}

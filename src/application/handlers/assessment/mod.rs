//! Assessment query handlers.
//!
//! Read-only handlers over the industry catalog and the scoring engine.

mod evaluate_feasibility;
mod get_industry_config;
mod list_industries;
mod score_assessment;

pub use evaluate_feasibility::{
    EvaluateFeasibilityHandler, EvaluateFeasibilityQuery, EvaluateFeasibilityResult,
    FeasibilityReport, RiskSummary,
};
pub use get_industry_config::{
    GetIndustryConfigHandler, GetIndustryConfigQuery, GetIndustryConfigResult, IndustryConfigView,
};
pub use list_industries::{
    ListIndustriesHandler, ListIndustriesQuery, ListIndustriesResult, ListTimelineOptionsHandler,
    ListTimelineOptionsQuery, ListTimelineOptionsResult,
};
pub use score_assessment::{
    ScoreAssessmentHandler, ScoreAssessmentQuery, ScoreAssessmentResult, ScoreCard,
};

//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod report;

pub use assessment::{
    EvaluateFeasibilityHandler, EvaluateFeasibilityQuery, FeasibilityReport, GetIndustryConfigHandler,
    GetIndustryConfigQuery, IndustryConfigView, ListIndustriesHandler, ListIndustriesQuery,
    ListTimelineOptionsHandler, ListTimelineOptionsQuery, RiskSummary, ScoreAssessmentHandler,
    ScoreAssessmentQuery, ScoreCard,
};
pub use report::{
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, ProjectReportError,
    ProjectReportHandler, ProjectReportQuery,
};

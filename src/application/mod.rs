//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Queries read the catalog and run the analysis; the one command generates
//! a report through the ReportGenerator port.

pub mod handlers;

pub use handlers::{
    EvaluateFeasibilityHandler, EvaluateFeasibilityQuery, GenerateReportCommand,
    GenerateReportError, GenerateReportHandler, GetIndustryConfigHandler, GetIndustryConfigQuery,
    ListIndustriesHandler, ListIndustriesQuery, ListTimelineOptionsHandler,
    ListTimelineOptionsQuery, ProjectReportError, ProjectReportHandler, ProjectReportQuery,
    ScoreAssessmentHandler, ScoreAssessmentQuery, ScoreCard,
};

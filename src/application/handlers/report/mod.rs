//! Report handlers.
//!
//! Generation goes through the ReportGenerator port; projection validates
//! the client-supplied report before running the pure projector.

mod generate_report;
mod project_report;

pub use generate_report::{
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
};
pub use project_report::{
    ProjectReportError, ProjectReportHandler, ProjectReportQuery, ProjectReportResult,
};

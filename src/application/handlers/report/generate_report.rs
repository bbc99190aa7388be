//! GenerateReportHandler - Command handler for the strategic report.
//!
//! Turns a completed assessment into a generator context and attaches the
//! returned report to the assessment.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::assessment::{Assessment, IndustryConfig, PriorityMap};
use crate::domain::foundation::ErrorCode;
use crate::ports::{AIError, IndustryCatalog, RatedArea, ReportContext, ReportGenerationError, ReportGenerator};

/// Command to generate a report for an assessment.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub assessment: Assessment,
}

/// The assessment with the new report attached.
pub type GenerateReportResult = Assessment;

#[derive(Debug, Clone, Error)]
pub enum GenerateReportError {
    #[error("Assessment is incomplete: {0} not set")]
    Incomplete(&'static str),

    #[error(transparent)]
    Generation(#[from] ReportGenerationError),
}

impl GenerateReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GenerateReportError::Incomplete(_) => ErrorCode::IncompleteAssessment,
            GenerateReportError::Generation(ReportGenerationError::Provider(AIError::RateLimited { .. })) => {
                ErrorCode::RateLimited
            }
            GenerateReportError::Generation(ReportGenerationError::Provider(_)) => ErrorCode::AIProviderError,
            GenerateReportError::Generation(_) => ErrorCode::InvalidReport,
        }
    }
}

pub struct GenerateReportHandler {
    catalog: Arc<dyn IndustryCatalog>,
    generator: Arc<dyn ReportGenerator>,
}

impl GenerateReportHandler {
    pub fn new(catalog: Arc<dyn IndustryCatalog>, generator: Arc<dyn ReportGenerator>) -> Self {
        Self { catalog, generator }
    }

    pub async fn handle(&self, cmd: GenerateReportCommand) -> Result<GenerateReportResult, GenerateReportError> {
        let mut assessment = cmd.assessment;

        let industry = assessment
            .industry
            .as_ref()
            .ok_or(GenerateReportError::Incomplete("industry"))?;
        let current = assessment
            .current_level
            .ok_or(GenerateReportError::Incomplete("current_level"))?;
        let target = assessment
            .target_level
            .ok_or(GenerateReportError::Incomplete("target_level"))?;

        let config = self.catalog.industry_config(industry.as_str());
        let context = ReportContext {
            industry: self
                .catalog
                .industry_label(industry.as_str())
                .unwrap_or(industry.as_str())
                .to_string(),
            current_level: config.describe(current),
            target_level: config.describe(target),
            timeline: assessment.timeline,
            rated_areas: rated_areas(config, &assessment.priorities),
        };

        let report = self.generator.generate(context).await?;
        tracing::info!(
            industry = %industry,
            actions = report.strategic_actions.len(),
            phases = report.roadmap.len(),
            "Strategic report generated"
        );

        assessment.attach_report(report);
        Ok(assessment)
    }
}

/// Rated areas of the configuration, in configuration order.
///
/// Ratings for ids the configuration does not know are dropped.
fn rated_areas(config: &IndustryConfig, priorities: &PriorityMap) -> Vec<RatedArea> {
    config
        .areas
        .iter()
        .filter_map(|area| {
            priorities.get(area.id.as_str()).map(|priority| RatedArea {
                id: area.id.clone(),
                title: area.title.clone(),
                priority,
                required_level: area.required_level,
            })
        })
        .collect()
}

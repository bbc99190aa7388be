//! Shared application state for the HTTP routes.

use std::sync::Arc;

use crate::application::{
    EvaluateFeasibilityHandler, GenerateReportHandler, GetIndustryConfigHandler,
    ListIndustriesHandler, ListTimelineOptionsHandler, ProjectReportHandler,
    ScoreAssessmentHandler,
};
use crate::adapters::validation::JsonReportValidator;
use crate::domain::assessment::UnratedDimensionPolicy;
use crate::ports::{IndustryCatalog, ReportGenerator, ReportSchemaValidator};

/// Dependencies shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn IndustryCatalog>,
    pub report_generator: Arc<dyn ReportGenerator>,
    /// Checks reports that clients send back to the server.
    pub report_validator: Arc<dyn ReportSchemaValidator>,
    pub unrated_policy: UnratedDimensionPolicy,
}

impl AppState {
    pub fn new(catalog: Arc<dyn IndustryCatalog>, report_generator: Arc<dyn ReportGenerator>) -> Self {
        Self {
            catalog,
            report_generator,
            report_validator: Arc::new(JsonReportValidator::new()),
            unrated_policy: UnratedDimensionPolicy::default(),
        }
    }

    pub fn with_unrated_policy(mut self, policy: UnratedDimensionPolicy) -> Self {
        self.unrated_policy = policy;
        self
    }

    pub fn list_industries_handler(&self) -> ListIndustriesHandler {
        ListIndustriesHandler::new(self.catalog.clone())
    }

    pub fn list_timeline_options_handler(&self) -> ListTimelineOptionsHandler {
        ListTimelineOptionsHandler::new(self.catalog.clone())
    }

    pub fn get_industry_config_handler(&self) -> GetIndustryConfigHandler {
        GetIndustryConfigHandler::new(self.catalog.clone())
    }

    pub fn score_assessment_handler(&self) -> ScoreAssessmentHandler {
        ScoreAssessmentHandler::new(self.catalog.clone(), self.unrated_policy)
    }

    pub fn evaluate_feasibility_handler(&self) -> EvaluateFeasibilityHandler {
        EvaluateFeasibilityHandler::new(self.catalog.clone())
    }

    pub fn generate_report_handler(&self) -> GenerateReportHandler {
        GenerateReportHandler::new(self.catalog.clone(), self.report_generator.clone())
    }

    pub fn project_report_handler(&self) -> ProjectReportHandler {
        ProjectReportHandler::new(self.report_validator.clone())
    }
}

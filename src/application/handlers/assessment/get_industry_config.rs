//! GetIndustryConfigHandler - Query handler for an industry's levels and areas.
//!
//! Unknown industries resolve to the generic configuration rather than an
//! error, so the wizard can always continue.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::assessment::{AssessmentArea, LevelDescription};
use crate::domain::foundation::IndustryKey;
use crate::ports::IndustryCatalog;

#[derive(Debug, Clone)]
pub struct GetIndustryConfigQuery {
    pub industry: IndustryKey,
}

/// Configuration view for one industry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryConfigView {
    pub industry: IndustryKey,
    /// Display label; the key itself for unknown industries.
    pub label: String,
    pub levels: Vec<LevelDescription>,
    pub areas: Vec<AssessmentArea>,
    pub categories: Vec<String>,
}

pub type GetIndustryConfigResult = IndustryConfigView;

pub struct GetIndustryConfigHandler {
    catalog: Arc<dyn IndustryCatalog>,
}

impl GetIndustryConfigHandler {
    pub fn new(catalog: Arc<dyn IndustryCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetIndustryConfigQuery) -> GetIndustryConfigResult {
        let key = query.industry.as_str();
        let config = self.catalog.industry_config(key);
        let label = self
            .catalog
            .industry_label(key)
            .map(str::to_string)
            .unwrap_or_else(|| {
                tracing::debug!(industry = %key, "Unknown industry, using generic configuration");
                key.to_string()
            });

        IndustryConfigView {
            label,
            levels: config.levels.clone(),
            areas: config.areas.clone(),
            categories: config.categories().into_iter().map(String::from).collect(),
            industry: query.industry,
        }
    }
}

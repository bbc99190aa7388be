//! ListIndustriesHandler - Query handlers for the selectable catalog entries.

use std::sync::Arc;

use crate::domain::assessment::{Industry, TimelineOption};
use crate::ports::IndustryCatalog;

/// Query for all selectable industries.
#[derive(Debug, Clone, Default)]
pub struct ListIndustriesQuery;

pub type ListIndustriesResult = Vec<Industry>;

pub struct ListIndustriesHandler {
    catalog: Arc<dyn IndustryCatalog>,
}

impl ListIndustriesHandler {
    pub fn new(catalog: Arc<dyn IndustryCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListIndustriesQuery) -> ListIndustriesResult {
        self.catalog.industries().to_vec()
    }
}

/// Query for the standard transformation horizons.
#[derive(Debug, Clone, Default)]
pub struct ListTimelineOptionsQuery;

pub type ListTimelineOptionsResult = Vec<TimelineOption>;

pub struct ListTimelineOptionsHandler {
    catalog: Arc<dyn IndustryCatalog>,
}

impl ListTimelineOptionsHandler {
    pub fn new(catalog: Arc<dyn IndustryCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListTimelineOptionsQuery) -> ListTimelineOptionsResult {
        self.catalog.timeline_options().to_vec()
    }
}

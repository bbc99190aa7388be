//! Industries and their level/area configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{AssessmentArea, CatalogError};
use crate::domain::foundation::{IndustryKey, MaturityLevel, TimelineMonths};

/// A selectable industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub id: IndustryKey,
    pub label: String,
}

/// Industry-specific description of one maturity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescription {
    pub level: MaturityLevel,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub characteristics: Vec<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// Level descriptions and assessment areas for one industry family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryConfig {
    pub levels: Vec<LevelDescription>,
    pub areas: Vec<AssessmentArea>,
}

impl IndustryConfig {
    /// Checks that levels 1 through 5 are described in order and that
    /// area ids are unique.
    pub fn validate(&self, family: &str) -> Result<(), CatalogError> {
        let in_order = self.levels.len() == MaturityLevel::ALL.len()
            && self
                .levels
                .iter()
                .zip(MaturityLevel::ALL)
                .all(|(desc, level)| desc.level == level);
        if !in_order {
            return Err(CatalogError::InvalidLevels {
                family: family.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for area in &self.areas {
            if !seen.insert(area.id.as_str()) {
                return Err(CatalogError::DuplicateArea {
                    family: family.to_string(),
                    area: area.id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Description of a level. Validated configs describe every level.
    pub fn level(&self, level: MaturityLevel) -> Option<&LevelDescription> {
        self.levels.iter().find(|d| d.level == level)
    }

    /// Description of a level, or a bare generic one if the config lacks it.
    pub fn describe(&self, level: MaturityLevel) -> LevelDescription {
        self.level(level).cloned().unwrap_or_else(|| LevelDescription {
            level,
            title: level.title().to_string(),
            subtitle: String::new(),
            characteristics: Vec::new(),
            symptoms: Vec::new(),
        })
    }

    pub fn area(&self, id: &str) -> Option<&AssessmentArea> {
        self.areas.iter().find(|a| a.id.as_str() == id)
    }

    /// Area categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.areas
            .iter()
            .map(|a| a.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

/// A selectable transformation horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineOption {
    pub months: TimelineMonths,
    pub label: String,
    pub description: String,
}

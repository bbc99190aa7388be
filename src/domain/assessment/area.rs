//! Assessment areas and the user's priority ratings for them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{AreaId, MaturityLevel, Rating};

/// A capability area the user can prioritize and report items can link to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentArea {
    pub id: AreaId,
    pub category: String,
    pub title: String,
    pub description: String,
    pub required_level: MaturityLevel,
}

/// Priority rating per assessment area.
///
/// Absent entries are unrated and count as priority 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityMap(HashMap<AreaId, Rating>);

impl PriorityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the priority of an area.
    pub fn rate(&mut self, area: AreaId, rating: Rating) {
        self.0.insert(area, rating);
    }

    pub fn with(mut self, area: AreaId, rating: Rating) -> Self {
        self.rate(area, rating);
        self
    }

    pub fn get(&self, area: &str) -> Option<Rating> {
        self.0.get(area).copied()
    }

    /// Priority of an area as 0..=5, 0 meaning unrated.
    pub fn priority_of(&self, area: &str) -> u8 {
        self.get(area).map_or(0, |r| r.value())
    }

    pub fn rated_count(&self) -> usize {
        self.0.len()
    }

    pub fn critical_count(&self) -> usize {
        self.0.values().filter(|r| r.is_critical()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AreaId, Rating)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AreaId, Rating)> for PriorityMap {
    fn from_iter<I: IntoIterator<Item = (AreaId, Rating)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

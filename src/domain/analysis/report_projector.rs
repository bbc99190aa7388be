//! Report Projector - filters report items by the user's area priorities.
//!
//! Strategic actions and roadmap phases share one priority derivation and
//! one filter predicate so both views always agree.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::PriorityMap;
use crate::domain::foundation::AreaId;
use crate::domain::report::{RoadmapPhase, StrategicAction, StrategicReport};

/// A report item linked to assessment areas.
pub trait PriorityLinked {
    fn related_area_ids(&self) -> &[AreaId];
}

impl PriorityLinked for StrategicAction {
    fn related_area_ids(&self) -> &[AreaId] {
        &self.related_area_ids
    }
}

impl PriorityLinked for RoadmapPhase {
    fn related_area_ids(&self) -> &[AreaId] {
        &self.related_area_ids
    }
}

/// Which report items to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityFilter {
    #[default]
    All,
    /// Derived priority of 3 or more.
    ImportantCritical,
    /// Derived priority of exactly 5.
    Critical,
}

impl PriorityFilter {
    /// Unprioritized items (priority 0) only pass `All`.
    pub fn admits(&self, priority: u8) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::ImportantCritical => priority >= 3,
            PriorityFilter::Critical => priority == 5,
        }
    }
}

/// Display badge for a derived priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityBadge {
    Unrated,
    Low,
    Important,
    Critical,
}

impl PriorityBadge {
    pub fn from_priority(priority: u8) -> Self {
        match priority {
            0 => PriorityBadge::Unrated,
            1..=2 => PriorityBadge::Low,
            3..=4 => PriorityBadge::Important,
            _ => PriorityBadge::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityBadge::Unrated => "Unrated",
            PriorityBadge::Low => "Low",
            PriorityBadge::Important => "Important",
            PriorityBadge::Critical => "Critical",
        }
    }
}

/// A kept report item with its derived priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prioritized<T> {
    pub item: T,
    pub priority: u8,
    pub badge: PriorityBadge,
}

/// Report items remaining after filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedReport {
    pub filter: PriorityFilter,
    pub actions: Vec<Prioritized<StrategicAction>>,
    pub roadmap: Vec<Prioritized<RoadmapPhase>>,
}

pub struct ReportProjector;

impl ReportProjector {
    /// Highest priority among the linked areas; 0 when none are linked or rated.
    pub fn derive_priority(related_area_ids: &[AreaId], priorities: &PriorityMap) -> u8 {
        related_area_ids
            .iter()
            .map(|id| priorities.priority_of(id.as_str()))
            .max()
            .unwrap_or(0)
    }

    /// Items admitted by the filter, in input order.
    pub fn filter_by_priority<'a, T: PriorityLinked>(
        items: &'a [T],
        priorities: &PriorityMap,
        filter: PriorityFilter,
    ) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| filter.admits(Self::derive_priority(item.related_area_ids(), priorities)))
            .collect()
    }

    /// Applies the filter to both actions and roadmap phases.
    pub fn project(
        report: &StrategicReport,
        priorities: &PriorityMap,
        filter: PriorityFilter,
    ) -> ProjectedReport {
        ProjectedReport {
            filter,
            actions: Self::prioritize(&report.strategic_actions, priorities, filter),
            roadmap: Self::prioritize(&report.roadmap, priorities, filter),
        }
    }

    fn prioritize<T: PriorityLinked + Clone>(
        items: &[T],
        priorities: &PriorityMap,
        filter: PriorityFilter,
    ) -> Vec<Prioritized<T>> {
        Self::filter_by_priority(items, priorities, filter)
            .into_iter()
            .map(|item| {
                let priority = Self::derive_priority(item.related_area_ids(), priorities);
                Prioritized {
                    item: item.clone(),
                    priority,
                    badge: PriorityBadge::from_priority(priority),
                }
            })
            .collect()
    }
}

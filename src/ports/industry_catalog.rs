//! Industry Catalog Port - static configuration lookup.
//!
//! Supplies the dimension set, archetype bands, benchmark tables and the
//! per-industry level/area configuration. Everything returned has already
//! been validated, so callers can rely on complete, consistent data.

use crate::domain::assessment::{
    ArchetypeBands, BenchmarkTable, Dimension, Industry, IndustryConfig, PeerBenchmark,
    TimelineOption,
};

/// Port for reading assessment configuration.
///
/// Unknown industry keys never fail: configuration and benchmarks fall back
/// to their generic entries.
pub trait IndustryCatalog: Send + Sync {
    /// All selectable industries, in display order.
    fn industries(&self) -> &[Industry];

    /// Display label for an industry key.
    fn industry_label(&self, industry: &str) -> Option<&str> {
        self.industries()
            .iter()
            .find(|i| i.id.as_str() == industry)
            .map(|i| i.label.as_str())
    }

    /// Level descriptions and areas for an industry, or the generic set.
    fn industry_config(&self, industry: &str) -> &IndustryConfig;

    fn dimensions(&self) -> &[Dimension];

    fn archetypes(&self) -> &ArchetypeBands;

    fn benchmarks(&self) -> &BenchmarkTable;

    /// Peer velocity for an industry, or the generic average.
    fn peer_benchmark(&self, industry: &str) -> &PeerBenchmark;

    fn timeline_options(&self) -> &[TimelineOption];
}

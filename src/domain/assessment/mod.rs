//! Assessment data model.
//!
//! Dimensions, archetype bands, benchmarks, industry configuration and the
//! session state that user input mutates. Configuration types validate
//! themselves on construction so the analysis layer can assume consistency.

mod archetype;
mod area;
mod benchmark;
mod dimension;
mod errors;
mod industry;
mod policy;
mod state;

pub use archetype::{Archetype, ArchetypeBands, SCORE_CEILING, SCORE_FLOOR};
pub use area::{AssessmentArea, PriorityMap};
pub use benchmark::{BenchmarkTable, DimensionBenchmark, PeerBenchmark, PeerBenchmarkTable};
pub use dimension::{validate_dimensions, Dimension, DimensionScores, WEIGHT_TOLERANCE};
pub use errors::CatalogError;
pub use industry::{Industry, IndustryConfig, LevelDescription, TimelineOption};
pub use policy::{UnratedDimensionPolicy, WeightPolicy};
pub use state::Assessment;

#[cfg(test)]
pub(crate) use archetype::tests::standard_bands;
#[cfg(test)]
pub(crate) use industry::tests::sample_config;

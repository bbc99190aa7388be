//! Configuration inconsistency errors.
//!
//! These are raised when catalog data is loaded, never on the scoring path.

use thiserror::Error;

/// A defect in the assessment configuration (dimensions, bands, benchmarks).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("No scoring dimensions configured")]
    NoDimensions,

    #[error("Dimension '{0}' is defined more than once")]
    DuplicateDimension(String),

    #[error("Dimension '{dimension}' has weight {weight}, expected a value in (0, 1]")]
    InvalidWeight { dimension: String, weight: f64 },

    #[error("Dimension weights sum to {sum}, expected 1.0")]
    WeightsDoNotSumToOne { sum: f64 },

    #[error("No maturity archetypes configured")]
    NoArchetypes,

    #[error("Archetype '{label}' has min score {min} above max score {max}")]
    InvertedBand { label: String, min: f64, max: f64 },

    #[error("Archetype '{next}' does not start where '{previous}' ends")]
    NonContiguousBands { previous: String, next: String },

    #[error("Archetype bands cover [{min}, {max}], expected [1, 5]")]
    IncompleteCoverage { min: f64, max: f64 },

    #[error("Benchmark for '{industry}' is missing dimension '{dimension}'")]
    BenchmarkMissingDimension { industry: String, dimension: String },

    #[error("Benchmark for '{industry}' defines unknown dimension '{dimension}'")]
    BenchmarkUnknownDimension { industry: String, dimension: String },

    #[error("Benchmark for '{industry}' has {dimension} = {value}, expected a value in [1, 5]")]
    BenchmarkOutOfRange {
        industry: String,
        dimension: String,
        value: f64,
    },

    #[error("No {table} entry for fallback key '{key}'")]
    MissingFallback { table: &'static str, key: String },

    #[error("Configuration family '{family}' must describe levels 1-5 in order")]
    InvalidLevels { family: String },

    #[error("Assessment area '{area}' is defined more than once in '{family}'")]
    DuplicateArea { family: String, area: String },

    #[error("Industry '{industry}' refers to unknown family '{family}'")]
    UnknownFamily { industry: String, family: String },

    #[error("Catalog could not be read: {0}")]
    Unreadable(String),
}

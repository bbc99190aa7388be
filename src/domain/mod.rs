//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ratings, levels, identifiers, errors)
//! - `assessment` - Dimensions, benchmarks, industry configuration, session state
//! - `analysis` - Pure scoring, benchmarking, feasibility and projection services
//! - `report` - Shape of the generated strategic report

pub mod analysis;
pub mod assessment;
pub mod foundation;
pub mod report;

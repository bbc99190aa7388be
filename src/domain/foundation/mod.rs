//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod maturity_level;
mod rating;
mod timeline;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{AreaId, DimensionId, IndustryKey};
pub use maturity_level::MaturityLevel;
pub use rating::Rating;
pub use timeline::TimelineMonths;

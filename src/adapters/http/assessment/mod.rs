//! Assessment HTTP adapter module.
//!
//! Catalog lookups, scoring and feasibility.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::assessment_routes;

//! Maturity Compass - Digital Maturity Self-Assessment
//!
//! Scores an organization's per-dimension ratings, classifies it into a
//! maturity archetype, benchmarks it against its industry, assesses the
//! feasibility of a target level and projects an AI-generated strategic
//! report onto the user's priorities.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

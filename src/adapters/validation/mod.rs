//! Validation Adapters - Schema validation implementations.
//!
//! Contains the structural validator for generated strategic reports.

mod report_schema_validator;

pub use report_schema_validator::JsonReportValidator;

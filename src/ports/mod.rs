//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IndustryCatalog` - Dimensions, bands, benchmarks and industry configuration
//! - `AIProvider` - Language model completions
//! - `ReportGenerator` - Strategic report production
//! - `ReportSchemaValidator` - Boundary validation of generated reports

mod ai_provider;
mod industry_catalog;
mod report_generator;
mod schema_validator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, ResponseFormat, TokenUsage,
};
pub use industry_catalog::IndustryCatalog;
pub use report_generator::{RatedArea, ReportContext, ReportGenerationError, ReportGenerator};
pub use schema_validator::{ReportSchemaValidator, SchemaValidationError};

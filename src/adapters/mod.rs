//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Gemini and mock AI providers, AI-backed report generator
//! - `catalog` - Static industry catalog
//! - `http` - Axum routes
//! - `validation` - Report schema validation

pub mod ai;
pub mod catalog;
pub mod http;
pub mod validation;

pub use ai::{AiReportGenerator, GeminiConfig, GeminiProvider, MockAIProvider};
pub use catalog::StaticIndustryCatalog;
pub use http::{api_router, AppState};
pub use validation::JsonReportValidator;

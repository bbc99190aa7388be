//! AI Adapters.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models over HTTPS
//! - `MockAIProvider` - Scripted provider for tests and offline runs
//! - `AiReportGenerator` - ReportGenerator backed by any AIProvider

mod ai_report_generator;
mod gemini_provider;
mod mock_provider;
mod prompt;

pub use ai_report_generator::{AiReportGenerator, DEFAULT_REPORT_TEMPERATURE};
pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use mock_provider::{MockAIProvider, MockResponse, SAMPLE_REPORT_JSON};
pub use prompt::{build_report_prompt, strip_code_fences, REPORT_SYSTEM_PROMPT};

//! AI-backed implementation of the ReportGenerator port.
//!
//! Prompts the injected provider, then treats the answer as untrusted:
//! strip fences, parse, validate against the report schema and only then
//! deserialize into domain types.

use async_trait::async_trait;
use std::sync::Arc;

use super::prompt::{build_report_prompt, strip_code_fences, REPORT_SYSTEM_PROMPT};
use crate::domain::report::StrategicReport;
use crate::ports::{
    AIProvider, CompletionRequest, MessageRole, ReportContext, ReportGenerationError,
    ReportGenerator, ReportSchemaValidator,
};

pub const DEFAULT_REPORT_TEMPERATURE: f32 = 0.3;
const REPORT_MAX_TOKENS: u32 = 8192;

pub struct AiReportGenerator {
    provider: Arc<dyn AIProvider>,
    validator: Arc<dyn ReportSchemaValidator>,
    temperature: f32,
}

impl AiReportGenerator {
    pub fn new(provider: Arc<dyn AIProvider>, validator: Arc<dyn ReportSchemaValidator>) -> Self {
        Self {
            provider,
            validator,
            temperature: DEFAULT_REPORT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn parse_report(&self, raw: &str) -> Result<StrategicReport, ReportGenerationError> {
        let json: serde_json::Value = serde_json::from_str(strip_code_fences(raw))
            .map_err(|e| ReportGenerationError::Malformed(e.to_string()))?;

        self.validator.validate(&json)?;

        serde_json::from_value(json).map_err(|e| ReportGenerationError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl ReportGenerator for AiReportGenerator {
    async fn generate(&self, context: ReportContext) -> Result<StrategicReport, ReportGenerationError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let info = self.provider.provider_info();

        tracing::info!(
            trace_id = %trace_id,
            provider = %info.name,
            model = %info.model,
            industry = %context.industry,
            rated_areas = context.rated_areas.len(),
            "Generating strategic report"
        );

        let request = CompletionRequest::new(&trace_id)
            .with_system_prompt(REPORT_SYSTEM_PROMPT)
            .with_message(MessageRole::User, build_report_prompt(&context))
            .with_temperature(self.temperature)
            .with_max_tokens(REPORT_MAX_TOKENS)
            .expecting_json();

        let response = self.provider.complete(request).await.map_err(|e| {
            tracing::warn!(trace_id = %trace_id, error = %e, "Report provider call failed");
            e
        })?;

        self.parse_report(&response.content).map_err(|e| {
            tracing::warn!(trace_id = %trace_id, error = %e, "Generated report rejected");
            e
        })
    }
}

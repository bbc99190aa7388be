//! Schema Validator Port - Boundary check for generated reports.
//!
//! Generated reports are untrusted. They are validated here before being
//! deserialized into domain types, so the projector never sees a
//! malformed payload.

use serde_json::Value;
use thiserror::Error;

/// Port for validating a raw report document.
///
/// # Contract
///
/// Implementations must:
/// - Require every top-level report section
/// - Check field types, enum members and numeric ranges
/// - Collect all failures rather than stopping at the first
pub trait ReportSchemaValidator: Send + Sync {
    fn validate(&self, report: &Value) -> Result<(), SchemaValidationError>;
}

/// Errors that can occur during schema validation.
///
/// # Security
///
/// Details may echo model output. Use `to_client_message()` when returning
/// errors to clients.
#[derive(Debug, Clone, Error)]
pub enum SchemaValidationError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Value out of range for field {field}: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Invalid value for field {field}: expected one of {allowed}")]
    InvalidEnum { field: String, allowed: String },

    #[error("Validation errors: {0:?}")]
    Multiple(Vec<SchemaValidationError>),
}

impl SchemaValidationError {
    /// Convert to client-safe error message.
    pub fn to_client_message(&self) -> String {
        match self {
            SchemaValidationError::MissingRequired { field } => {
                format!("Missing required field: {}", field)
            }
            SchemaValidationError::InvalidType { field, expected, .. } => {
                format!("Invalid type for field '{}': expected {}", field, expected)
            }
            SchemaValidationError::OutOfRange { field, min, max, .. } => {
                format!("Field '{}' must be between {} and {}", field, min, max)
            }
            SchemaValidationError::InvalidEnum { field, allowed } => {
                format!("Field '{}' must be one of {}", field, allowed)
            }
            SchemaValidationError::Multiple(errors) => errors
                .first()
                .map(|e| e.to_client_message())
                .unwrap_or_else(|| "Validation failed".to_string()),
        }
    }

    pub fn error_count(&self) -> usize {
        match self {
            SchemaValidationError::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }
}

impl PartialEq for SchemaValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_displays_field_name() {
        let err = SchemaValidationError::MissingRequired {
            field: "executiveSummary".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required field: executiveSummary");
        assert_eq!(err.to_client_message(), "Missing required field: executiveSummary");
    }

    #[test]
    fn client_message_for_invalid_type_hides_actual() {
        let err = SchemaValidationError::InvalidType {
            field: "topChallenges[0].severity".to_string(),
            expected: "integer".to_string(),
            actual: "string".to_string(),
        };
        let msg = err.to_client_message();
        assert!(msg.contains("expected integer"));
        assert!(!msg.contains("got"));
    }

    #[test]
    fn invalid_enum_lists_allowed_values() {
        let err = SchemaValidationError::InvalidEnum {
            field: "strategicActions[0].type".to_string(),
            allowed: "People, Process".to_string(),
        };
        assert_eq!(
            err.to_client_message(),
            "Field 'strategicActions[0].type' must be one of People, Process"
        );
    }

    #[test]
    fn multiple_errors_returns_first_in_client_message() {
        let err = SchemaValidationError::Multiple(vec![
            SchemaValidationError::MissingRequired {
                field: "roadmap".to_string(),
            },
            SchemaValidationError::MissingRequired {
                field: "keyTrends".to_string(),
            },
        ]);
        assert_eq!(err.to_client_message(), "Missing required field: roadmap");
        assert_eq!(err.error_count(), 2);
    }
}

//! Report Schema Validator - Implementation of ReportSchemaValidator.
//!
//! Hand-written structural checks for the strategic report document. Every
//! violation is collected so a single pass reports all problems.

use serde_json::{Map, Value};

use crate::domain::report::ActionType;
use crate::ports::{ReportSchemaValidator, SchemaValidationError};

const SEVERITY_MAX: u64 = 100;

/// Validates generated reports before deserialization.
///
/// Stateless, so a single instance can be shared across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportValidator;

impl JsonReportValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_report(&self, report: &Value) -> Result<(), SchemaValidationError> {
        let obj = self.require_object(report, "root")?;
        let mut errors = Vec::new();

        self.check_string(obj, "executiveSummary", "root", &mut errors);
        self.check_array_of(obj, "keyTrends", "root", &mut errors, |v, item, path, errs| {
            v.validate_trend(item, path, errs)
        });
        self.check_array_of(obj, "topChallenges", "root", &mut errors, |v, item, path, errs| {
            v.validate_challenge(item, path, errs)
        });
        self.check_array_of(obj, "strategicActions", "root", &mut errors, |v, item, path, errs| {
            v.validate_action(item, path, errs)
        });
        self.check_array_of(obj, "roadmap", "root", &mut errors, |v, item, path, errs| {
            v.validate_phase(item, path, errs)
        });

        match obj.get("riskAssessment") {
            None => errors.push(missing("riskAssessment", "root")),
            Some(value) => match self.require_object(value, "riskAssessment") {
                Ok(risk) => {
                    self.check_string(risk, "probability", "riskAssessment", &mut errors);
                    self.check_string_array(risk, "riskFactors", "riskAssessment", &mut errors);
                }
                Err(e) => errors.push(e),
            },
        }

        match obj.get("responsibleAI") {
            None => errors.push(missing("responsibleAI", "root")),
            Some(value) => match self.require_object(value, "responsibleAI") {
                Ok(rai) => {
                    self.check_string_array(rai, "potentialBiases", "responsibleAI", &mut errors);
                    self.check_string_array(rai, "mitigationStrategies", "responsibleAI", &mut errors);
                }
                Err(e) => errors.push(e),
            },
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self::collect_errors(errors))
        }
    }

    // =========================================================================
    // Item validators
    // =========================================================================

    fn validate_trend(&self, item: &Value, path: &str, errors: &mut Vec<SchemaValidationError>) {
        let obj = match self.require_object(item, path) {
            Ok(obj) => obj,
            Err(e) => {
                errors.push(e);
                return;
            }
        };
        self.check_string(obj, "trend", path, errors);
        self.check_string(obj, "impact", path, errors);
        self.check_optional_string(obj, "icon", path, errors);
    }

    fn validate_challenge(&self, item: &Value, path: &str, errors: &mut Vec<SchemaValidationError>) {
        let obj = match self.require_object(item, path) {
            Ok(obj) => obj,
            Err(e) => {
                errors.push(e);
                return;
            }
        };
        self.check_string(obj, "challenge", path, errors);
        self.check_string(obj, "description", path, errors);

        match obj.get("severity") {
            None => errors.push(missing("severity", path)),
            Some(value) => match value.as_u64() {
                Some(n) if n <= SEVERITY_MAX => {}
                Some(n) => errors.push(SchemaValidationError::OutOfRange {
                    field: format!("{}.severity", path),
                    value: n.to_string(),
                    min: "0".to_string(),
                    max: SEVERITY_MAX.to_string(),
                }),
                None => errors.push(SchemaValidationError::InvalidType {
                    field: format!("{}.severity", path),
                    expected: "integer".to_string(),
                    actual: Self::type_name(value),
                }),
            },
        }
    }

    fn validate_action(&self, item: &Value, path: &str, errors: &mut Vec<SchemaValidationError>) {
        let obj = match self.require_object(item, path) {
            Ok(obj) => obj,
            Err(e) => {
                errors.push(e);
                return;
            }
        };
        self.check_string(obj, "title", path, errors);
        self.check_string(obj, "description", path, errors);
        self.check_string_array(obj, "keySteps", path, errors);
        self.check_optional_string_array(obj, "relatedAreaIds", path, errors);

        match obj.get("type") {
            None => errors.push(missing("type", path)),
            Some(value) => {
                let allowed: Vec<&str> = ActionType::ALL.iter().map(|t| t.as_str()).collect();
                if let Err(e) = self.validate_enum(value, &allowed, &format!("{}.type", path)) {
                    errors.push(e);
                }
            }
        }
    }

    fn validate_phase(&self, item: &Value, path: &str, errors: &mut Vec<SchemaValidationError>) {
        let obj = match self.require_object(item, path) {
            Ok(obj) => obj,
            Err(e) => {
                errors.push(e);
                return;
            }
        };
        self.check_string(obj, "phaseName", path, errors);
        self.check_string(obj, "duration", path, errors);
        self.check_string(obj, "focus", path, errors);
        self.check_string_array(obj, "keyDeliverables", path, errors);
        self.check_optional_string_array(obj, "relatedAreaIds", path, errors);
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn require_object<'a>(
        &self,
        value: &'a Value,
        path: &str,
    ) -> Result<&'a Map<String, Value>, SchemaValidationError> {
        value.as_object().ok_or_else(|| SchemaValidationError::InvalidType {
            field: path.to_string(),
            expected: "object".to_string(),
            actual: Self::type_name(value),
        })
    }

    fn check_string(
        &self,
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        match obj.get(field) {
            None => errors.push(missing(field, parent)),
            Some(value) if !value.is_string() => errors.push(invalid_type(field, parent, "string", value)),
            Some(_) => {}
        }
    }

    fn check_optional_string(
        &self,
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        if let Some(value) = obj.get(field) {
            if !value.is_string() && !value.is_null() {
                errors.push(invalid_type(field, parent, "string", value));
            }
        }
    }

    fn check_string_array(
        &self,
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        match obj.get(field) {
            None => errors.push(missing(field, parent)),
            Some(value) => self.check_string_items(value, field, parent, errors),
        }
    }

    fn check_optional_string_array(
        &self,
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        if let Some(value) = obj.get(field) {
            self.check_string_items(value, field, parent, errors);
        }
    }

    fn check_string_items(
        &self,
        value: &Value,
        field: &str,
        parent: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        match value.as_array() {
            None => errors.push(invalid_type(field, parent, "array", value)),
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        errors.push(invalid_type(&format!("{}[{}]", field, i), parent, "string", item));
                    }
                }
            }
        }
    }

    fn check_array_of<F>(
        &self,
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
        errors: &mut Vec<SchemaValidationError>,
        validate_item: F,
    ) where
        F: Fn(&Self, &Value, &str, &mut Vec<SchemaValidationError>),
    {
        match obj.get(field) {
            None => errors.push(missing(field, parent)),
            Some(value) => match value.as_array() {
                None => errors.push(invalid_type(field, parent, "array", value)),
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        validate_item(self, item, &format!("{}[{}]", field, i), errors);
                    }
                }
            },
        }
    }

    fn validate_enum(
        &self,
        value: &Value,
        valid_values: &[&str],
        path: &str,
    ) -> Result<(), SchemaValidationError> {
        match value.as_str() {
            Some(s) if valid_values.contains(&s) => Ok(()),
            Some(_) => Err(SchemaValidationError::InvalidEnum {
                field: path.to_string(),
                allowed: valid_values.join(", "),
            }),
            None => Err(SchemaValidationError::InvalidType {
                field: path.to_string(),
                expected: "string".to_string(),
                actual: Self::type_name(value),
            }),
        }
    }

    fn type_name(value: &Value) -> String {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }

    fn collect_errors(mut errors: Vec<SchemaValidationError>) -> SchemaValidationError {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            SchemaValidationError::Multiple(errors)
        }
    }
}

fn qualified(field: &str, parent: &str) -> String {
    if parent == "root" {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

fn missing(field: &str, parent: &str) -> SchemaValidationError {
    SchemaValidationError::MissingRequired {
        field: qualified(field, parent),
    }
}

fn invalid_type(field: &str, parent: &str, expected: &str, actual: &Value) -> SchemaValidationError {
    SchemaValidationError::InvalidType {
        field: qualified(field, parent),
        expected: expected.to_string(),
        actual: JsonReportValidator::type_name(actual),
    }
}

impl ReportSchemaValidator for JsonReportValidator {
    fn validate(&self, report: &Value) -> Result<(), SchemaValidationError> {
        self.validate_report(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::sample_report_json;
    use serde_json::json;

    fn validator() -> JsonReportValidator {
        JsonReportValidator::new()
    }

    #[test]
    fn accepts_well_formed_report() {
        assert!(validator().validate(&sample_report_json()).is_ok());
    }

    #[test]
    fn accepts_bundled_sample_report() {
        let sample: Value =
            serde_json::from_str(crate::adapters::ai::SAMPLE_REPORT_JSON).unwrap();
        assert!(validator().validate(&sample).is_ok());
    }

    #[test]
    fn rejects_non_object_root() {
        let err = validator().validate(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, SchemaValidationError::InvalidType { .. }));
    }

    #[test]
    fn reports_every_missing_section() {
        let err = validator().validate(&json!({"executiveSummary": "x"})).unwrap_err();
        // keyTrends, topChallenges, strategicActions, roadmap, riskAssessment, responsibleAI
        assert_eq!(err.error_count(), 6);
    }

    #[test]
    fn rejects_unknown_action_type() {
        let mut report = sample_report_json();
        report["strategicActions"][0]["type"] = json!("Magic");
        let err = validator().validate(&report).unwrap_err();
        assert!(matches!(err, SchemaValidationError::InvalidEnum { ref field, .. } if field == "strategicActions[0].type"));
    }

    #[test]
    fn rejects_severity_out_of_range_or_fractional() {
        let mut report = sample_report_json();
        report["topChallenges"][0]["severity"] = json!(140);
        assert!(matches!(
            validator().validate(&report).unwrap_err(),
            SchemaValidationError::OutOfRange { .. }
        ));

        report["topChallenges"][0]["severity"] = json!(55.5);
        assert!(matches!(
            validator().validate(&report).unwrap_err(),
            SchemaValidationError::InvalidType { .. }
        ));
    }

    #[test]
    fn related_area_ids_are_optional_but_typed() {
        let mut report = sample_report_json();
        report["roadmap"][0]
            .as_object_mut()
            .unwrap()
            .remove("relatedAreaIds");
        assert!(validator().validate(&report).is_ok());

        report["roadmap"][0]["relatedAreaIds"] = json!(["data_gov", 7]);
        let err = validator().validate(&report).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid type for field roadmap[0].relatedAreaIds[1]: expected string, got number"
        );
    }

    #[test]
    fn nested_missing_field_is_qualified() {
        let mut report = sample_report_json();
        report["riskAssessment"].as_object_mut().unwrap().remove("riskFactors");
        let err = validator().validate(&report).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: riskAssessment.riskFactors");
    }
}

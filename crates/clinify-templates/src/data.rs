use serde_json::Value;

use clinify_core::models::section::FieldRules;
use clinify_core::models::validation::{SectionValidationResult, ValueKind};

pub const MISSING_DATA: &str = "Section data is missing or invalid";

/// Check one section's submitted data against its field rules.
///
/// Missing required fields (absent, `null` or `""`) are errors; present
/// values of the wrong kind are warnings only. Data that is not a JSON
/// object short-circuits with a single error. Never fails.
pub fn validate_section_data(section_data: &Value, rules: &FieldRules) -> SectionValidationResult {
    let Some(data) = section_data.as_object() else {
        return SectionValidationResult::invalid(MISSING_DATA);
    };

    let mut errors = Vec::new();
    for field in &rules.required_fields {
        let missing = match data.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if missing {
            errors.push(format!("Required field '{field}' is missing"));
        }
    }

    let mut warnings = Vec::new();
    for (field, expected) in &rules.field_types {
        let Some(actual) = data.get(field).and_then(ValueKind::of) else {
            continue;
        };
        let expected = match expected {
            Value::String(tag) => tag.clone(),
            other => other.to_string(),
        };
        if actual.as_str() != expected {
            warnings.push(format!(
                "Field '{field}' expected {expected} but got {actual}"
            ));
        }
    }

    SectionValidationResult::new(errors, warnings)
}

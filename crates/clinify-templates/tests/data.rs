use serde_json::json;

use clinify_core::models::section::FieldRules;
use clinify_core::models::validation::SectionValidationResult;
use clinify_templates::validate_section_data;

fn rules(value: serde_json::Value) -> FieldRules {
    serde_json::from_value(value).unwrap()
}

#[test]
fn non_object_data_short_circuits() {
    let rules = rules(json!({ "requiredFields": ["x"], "fieldTypes": { "x": "number" } }));
    let expected = SectionValidationResult {
        errors: vec!["Section data is missing or invalid".to_string()],
        warnings: vec![],
        is_valid: false,
    };

    assert_eq!(validate_section_data(&json!(null), &rules), expected);
    assert_eq!(validate_section_data(&json!("text"), &rules), expected);
    assert_eq!(validate_section_data(&json!([1]), &rules), expected);
}

#[test]
fn missing_required_field_is_an_error() {
    let result = validate_section_data(&json!({}), &rules(json!({ "requiredFields": ["x"] })));
    assert_eq!(result.errors, vec!["Required field 'x' is missing"]);
    assert!(result.warnings.is_empty());
    assert!(!result.is_valid);
}

#[test]
fn null_and_empty_string_count_as_missing() {
    let rules = rules(json!({ "requiredFields": ["a", "b", "c", "d"] }));
    let result = validate_section_data(&json!({ "a": null, "b": "", "c": " ", "d": 0 }), &rules);
    assert_eq!(
        result.errors,
        vec!["Required field 'a' is missing", "Required field 'b' is missing"]
    );
}

#[test]
fn type_mismatch_is_only_a_warning() {
    let result = validate_section_data(&json!({ "x": "5" }), &rules(json!({ "fieldTypes": { "x": "number" } })));
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings, vec!["Field 'x' expected number but got string"]);
    assert!(result.is_valid);
}

#[test]
fn arrays_are_not_objects() {
    let rules = rules(json!({ "fieldTypes": { "items": "object", "meta": "object", "tags": "array" } }));
    let data = json!({ "items": [1, 2], "meta": { "k": 1 }, "tags": [] });

    let result = validate_section_data(&data, &rules);
    assert_eq!(result.warnings, vec!["Field 'items' expected object but got array"]);
}

#[test]
fn absent_or_null_values_skip_type_checks() {
    let rules = rules(json!({ "fieldTypes": { "a": "string", "b": "boolean" } }));
    let result = validate_section_data(&json!({ "b": null }), &rules);
    assert!(result.warnings.is_empty());
    assert!(result.is_valid);
}

#[test]
fn warnings_follow_declaration_order() {
    let rules = rules(json!({ "fieldTypes": { "zeta": "string", "alpha": "string" } }));
    let result = validate_section_data(&json!({ "zeta": 1, "alpha": true }), &rules);
    assert_eq!(
        result.warnings,
        vec![
            "Field 'zeta' expected string but got number",
            "Field 'alpha' expected string but got boolean",
        ]
    );
}

#[test]
fn unknown_expected_tag_always_warns() {
    let rules = rules(json!({ "fieldTypes": { "score": "integer" } }));
    let result = validate_section_data(&json!({ "score": 3 }), &rules);
    assert_eq!(result.warnings, vec!["Field 'score' expected integer but got number"]);
}

#[test]
fn no_rules_accepts_anything() {
    let result = validate_section_data(&json!({ "whatever": [1, "two"] }), &FieldRules::default());
    assert_eq!(result, SectionValidationResult::new(vec![], vec![]));
    assert!(result.is_valid);
}

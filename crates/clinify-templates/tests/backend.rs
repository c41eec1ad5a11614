use serde_json::json;

use clinify_templates::backend::{BackendTemplate, UnknownComponent, adapt_backend_template};
use clinify_templates::normalize_template;

fn backend(value: serde_json::Value) -> BackendTemplate {
    serde_json::from_value(value).unwrap()
}

fn pt_evaluation() -> BackendTemplate {
    backend(json!({
        "id": 12,
        "discipline": "PT",
        "note_type": "Evaluation",
        "is_active": true,
        "sections": [
            { "id": 1, "section_name": "Initial Evaluation", "is_required": true },
            { "id": 2, "section_name": "Vitals", "is_required": false,
              "description": "BP, HR, SpO2", "form_schema": { "fields": ["bp"] } },
            { "id": 3, "section_name": "Short & Long Term Goals", "is_required": true },
            { "id": 4, "section_name": "Wound Care" }
        ]
    }))
}

#[test]
fn maps_backend_fields_onto_config() {
    let adapted = adapt_backend_template(&pt_evaluation());
    let config = &adapted.config;

    assert_eq!(config.template_id, "12");
    assert_eq!(config.name.as_deref(), Some("PT Evaluation"));
    assert_eq!(config.extra["discipline"], json!("PT"));
    assert_eq!(config.extra["note_type"], json!("Evaluation"));
    assert_eq!(config.extra["is_active"], json!(true));

    let components: Vec<&str> = config.sections.iter().map(|s| s.component.as_str()).collect();
    assert_eq!(
        components,
        vec![
            "SubjectiveSection",
            "VitalsSkillsSection",
            "ShortLongTermGoalsSkillsSection",
            "Wound Care",
        ]
    );

    let vitals = &config.sections[1];
    assert_eq!(vitals.id.as_deref(), Some("2"));
    assert_eq!(vitals.order, Some(2.0));
    assert_eq!(vitals.required, Some(false));
    assert_eq!(vitals.description.as_deref(), Some("BP, HR, SpO2"));
    assert_eq!(vitals.extra["section_name"], json!("Vitals"));
    assert_eq!(vitals.extra["form_schema"], json!({ "fields": ["bp"] }));
}

#[test]
fn reports_unknown_components() {
    let adapted = adapt_backend_template(&pt_evaluation());
    let report = &adapted.report;

    assert_eq!(report.total_sections, 4);
    assert_eq!(report.valid_sections, 3);
    assert_eq!(
        report.unknown_components,
        vec![UnknownComponent {
            section_name: "Wound Care".to_string(),
            component: "Wound Care".to_string(),
        }]
    );
    assert!(report.is_usable());
}

#[test]
fn sections_without_component_are_dropped() {
    let adapted = adapt_backend_template(&backend(json!({
        "id": "t-1",
        "discipline": "OT",
        "note_type": "Visit",
        "sections": [
            { "id": 1, "section_name": "" },
            { "id": 2, "section_name": "ADL / Self Care Skills" }
        ]
    })));

    assert_eq!(adapted.report.missing_components, vec![String::new()]);
    assert_eq!(adapted.config.sections.len(), 1);
    assert_eq!(adapted.config.sections[0].order, Some(2.0));
    assert!(adapted.report.is_usable());
}

#[test]
fn missing_section_id_makes_template_unusable() {
    let adapted = adapt_backend_template(&backend(json!({
        "id": "t-2",
        "discipline": "ST",
        "note_type": "Visit",
        "sections": [{ "section_name": "Subjective" }]
    })));

    assert_eq!(adapted.report.missing_ids, vec!["Subjective"]);
    assert!(!adapted.report.is_usable());
}

#[test]
fn no_known_components_is_unusable() {
    let adapted = adapt_backend_template(&backend(json!({
        "id": 3,
        "discipline": "PT",
        "note_type": "Discharge",
        "sections": [{ "id": 1, "section_name": "Custom Block" }]
    })));
    assert_eq!(adapted.report.valid_sections, 0);
    assert!(!adapted.report.is_usable());

    let empty = adapt_backend_template(&backend(json!({
        "id": 4, "discipline": "PT", "note_type": "Visit", "sections": []
    })));
    assert!(!empty.report.is_usable());
}

#[test]
fn missing_template_id_is_reported() {
    let adapted = adapt_backend_template(&backend(json!({
        "id": null,
        "discipline": "PT",
        "note_type": "Visit",
        "sections": [{ "id": 1, "section_name": "Vitals" }]
    })));
    assert!(adapted.report.missing_template_id);
    assert!(!adapted.report.is_usable());
}

#[test]
fn adapted_config_normalizes() {
    let adapted = adapt_backend_template(&pt_evaluation());
    let template = normalize_template(&adapted.config).unwrap();

    let goals = &template.sections[2];
    assert_eq!(goals.id, "3");
    assert_eq!(goals.name, "ShortLongTermGoalsSkills");
    assert!(goals.required);
}

use serde_json::json;

use clinify_core::models::section::{Section, SectionDescriptor};
use clinify_templates::{
    SectionFilter, filter_sections, group_sections_by_category, parse_template_config,
};

fn sections() -> Vec<Section> {
    parse_template_config(json!({
        "templateId": "x",
        "sections": [
            { "component": "SubjectiveSection", "order": 1, "required": true, "category": "history" },
            { "component": "VitalsSection", "order": 2, "category": "exam",
              "description": "Blood pressure and heart rate" },
            { "component": "BalanceSection", "order": 3, "category": "exam" },
            { "component": "SignatureSection", "order": 4, "required": true }
        ]
    }))
    .unwrap()
    .sections
}

fn ids(found: &[&Section]) -> Vec<String> {
    found.iter().map(|s| s.id.clone()).collect()
}

#[test]
fn absent_list_filters_to_nothing() {
    let found = filter_sections::<Section>(None, &SectionFilter::default());
    assert!(found.is_empty());
}

#[test]
fn empty_criteria_keep_everything() {
    let sections = sections();
    let found = filter_sections(Some(sections.as_slice()), &SectionFilter::default());
    assert_eq!(found.len(), 4);
}

#[test]
fn filters_on_required() {
    let sections = sections();
    let criteria = SectionFilter {
        required: Some(true),
        ..SectionFilter::default()
    };
    assert_eq!(
        ids(&filter_sections(Some(sections.as_slice()), &criteria)),
        vec!["subjective", "signature"]
    );

    let criteria = SectionFilter {
        required: Some(false),
        ..SectionFilter::default()
    };
    assert_eq!(
        ids(&filter_sections(Some(sections.as_slice()), &criteria)),
        vec!["vitals", "balance"]
    );
}

#[test]
fn combines_category_and_search() {
    let sections = sections();
    let criteria = SectionFilter {
        category: Some("exam".to_string()),
        search: Some("BLOOD".to_string()),
        ..SectionFilter::default()
    };
    assert_eq!(ids(&filter_sections(Some(sections.as_slice()), &criteria)), vec!["vitals"]);
}

#[test]
fn search_matches_component_name() {
    let sections = sections();
    let criteria = SectionFilter {
        search: Some("signaturesection".to_string()),
        ..SectionFilter::default()
    };
    assert_eq!(ids(&filter_sections(Some(sections.as_slice()), &criteria)), vec!["signature"]);
}

#[test]
fn empty_strings_impose_no_constraint() {
    let sections = sections();
    let criteria = SectionFilter {
        required: None,
        category: Some(String::new()),
        search: Some(String::new()),
    };
    assert_eq!(filter_sections(Some(sections.as_slice()), &criteria).len(), 4);
}

#[test]
fn raw_sections_without_required_flag_do_not_match_false() {
    let raw: Vec<SectionDescriptor> = serde_json::from_value(json!([
        { "component": "A", "order": 1 },
        { "component": "B", "order": 2, "required": false }
    ]))
    .unwrap();
    let criteria = SectionFilter {
        required: Some(false),
        ..SectionFilter::default()
    };

    let found = filter_sections(Some(raw.as_slice()), &criteria);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].component.as_str(), "B");
}

#[test]
fn groups_by_category_with_general_fallback() {
    let sections = sections();
    let groups = group_sections_by_category(Some(sections.as_slice()));

    assert_eq!(groups.len(), 3);
    assert_eq!(ids(&groups["exam"]), vec!["vitals", "balance"]);
    assert_eq!(ids(&groups["history"]), vec!["subjective"]);
    assert_eq!(ids(&groups["general"]), vec!["signature"]);
}

#[test]
fn categories_keep_first_seen_order() {
    let sections = sections();
    let groups = group_sections_by_category(Some(sections.as_slice()));

    let categories: Vec<&str> = groups.categories().collect();
    assert_eq!(categories, vec!["history", "exam", "general"]);
    assert!(groups.get("plan").is_none());
}

#[test]
fn raw_sections_group_under_default_category() {
    let raw: Vec<SectionDescriptor> = serde_json::from_value(json!([
        { "component": "A", "order": 1 },
        { "component": "B", "order": 2, "category": "exam" }
    ]))
    .unwrap();

    let groups = group_sections_by_category(Some(raw.as_slice()));
    let summary: Vec<(&str, usize)> = groups.iter().map(|(c, s)| (c, s.len())).collect();
    assert_eq!(summary, vec![("general", 1), ("exam", 1)]);
}

#[test]
fn absent_list_gives_no_groups() {
    assert!(group_sections_by_category::<Section>(None).is_empty());
}

use clinify_core::components::{
    ComponentTag, component_for_section_name, icon_for_section, is_known_component,
};

#[test]
fn empty_tag_is_rejected() {
    assert!(ComponentTag::new("").is_err());
    assert_eq!(ComponentTag::new("VitalsSection").unwrap().as_str(), "VitalsSection");
}

#[test]
fn short_name_drops_first_section_only() {
    let tag = ComponentTag::new("SectionHeaderSection").unwrap();
    assert_eq!(tag.short_name(), "HeaderSection");
    assert_eq!(ComponentTag::new("MuscleStrengthSection").unwrap().short_name(), "MuscleStrength");
}

#[test]
fn descriptive_names_resolve_to_registered_components() {
    for name in [
        "Vitals",
        "Initial Evaluation",
        "Short & Long Term Goals",
        " Patient / Caregiver Education  ",
        "Muscle Strength/ROM",
        "Signature",
    ] {
        let component = component_for_section_name(name);
        assert!(is_known_component(component), "{name} -> {component}");
    }
}

#[test]
fn unmapped_names_pass_through() {
    assert_eq!(component_for_section_name("CustomSection"), "CustomSection");
    assert!(!ComponentTag::new("CustomSection").unwrap().is_known());
}

#[test]
fn icon_table() {
    assert_eq!(icon_for_section("Vitals"), Some("fas fa-heartbeat"));
    assert_eq!(icon_for_section("Goals"), Some("fas fa-bullseye"));
    assert_eq!(icon_for_section("Unknown"), None);
}

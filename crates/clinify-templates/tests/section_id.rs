use clinify_templates::generate_section_id;

#[test]
fn strips_suffix_and_kebab_cases() {
    assert_eq!(generate_section_id("MuscleStrengthSection"), "muscle-strength");
    assert_eq!(generate_section_id("VitalsSection"), "vitals");
    assert_eq!(generate_section_id("CognitiveStatusSection"), "cognitive-status");
}

#[test]
fn capital_runs_are_split_letter_by_letter() {
    assert_eq!(generate_section_id("ADLSelfCareSection"), "a-d-l-self-care");
}

#[test]
fn only_first_section_is_removed() {
    assert_eq!(generate_section_id("SectionSection"), "section");
}

#[test]
fn camel_case_and_empty_input() {
    assert_eq!(generate_section_id("painScale"), "pain-scale");
    assert_eq!(generate_section_id(""), "");
    assert_eq!(generate_section_id("Section"), "");
}

/// Derive a section id from its component name.
///
/// The first `"Section"` is removed, then every ASCII capital becomes its
/// lowercase form, preceded by `-` unless it starts the string:
/// `"MuscleStrengthSection"` gives `"muscle-strength"`. Capital runs are not
/// grouped, so `"ADLSelfCareSection"` gives `"a-d-l-self-care"`; stored note
/// data references ids built this way.
pub fn generate_section_id(component_name: &str) -> String {
    let stripped = component_name.replacen("Section", "", 1);
    let mut id = String::with_capacity(stripped.len() + 4);

    for (index, ch) in stripped.char_indices() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                id.push('-');
            }
            id.push(ch.to_ascii_lowercase());
        } else {
            id.push(ch);
        }
    }

    id
}

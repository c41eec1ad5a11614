use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use clinify_core::components::icon_for_section;
use clinify_core::models::section::Section;
use clinify_core::models::template::NormalizedTemplate;

/// One entry of the note's section navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NavigationItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub required: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NoteProgress {
    pub completed: usize,
    pub total: usize,
    /// Required sections not yet completed.
    pub required_remaining: usize,
}

fn backend_name(section: &Section) -> Option<&str> {
    section
        .extra
        .get("section_name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
}

/// Navigation icon: the icon table entry for the backend section name or
/// short component name, else the section's own icon.
pub fn section_icon(section: &Section) -> String {
    backend_name(section)
        .and_then(icon_for_section)
        .or_else(|| icon_for_section(&section.component.short_name()))
        .or_else(|| icon_for_section(section.component.as_str()))
        .map(str::to_string)
        .unwrap_or_else(|| section.icon.clone())
}

/// Whether a section's data holds at least one filled-in value.
///
/// Filled means a non-blank string, `true`, a positive number, a non-empty
/// array, or an object with a filled scalar one level down.
pub fn is_section_complete(section_data: &Value) -> bool {
    let Some(data) = section_data.as_object() else {
        return false;
    };

    data.values().any(|value| match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(nested) => nested.values().any(is_filled_scalar),
        scalar => is_filled_scalar(scalar),
    })
}

fn is_filled_scalar(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f > 0.0),
        _ => false,
    }
}

/// Navigation entries for every section, in template order. `note_data` is
/// the note's data object keyed by section id.
pub fn section_navigation(template: &NormalizedTemplate, note_data: &Value) -> Vec<NavigationItem> {
    template
        .sections
        .iter()
        .map(|section| {
            let name = backend_name(section)
                .or(Some(section.name.as_str()).filter(|n| !n.is_empty()))
                .unwrap_or("Section");
            let completed = note_data
                .get(&section.id)
                .is_some_and(is_section_complete);

            NavigationItem {
                id: section.id.clone(),
                name: name.to_string(),
                icon: section_icon(section),
                required: section.required,
                completed,
            }
        })
        .collect()
}

pub fn note_progress(items: &[NavigationItem]) -> NoteProgress {
    NoteProgress {
        completed: items.iter().filter(|i| i.completed).count(),
        total: items.len(),
        required_remaining: items.iter().filter(|i| i.required && !i.completed).count(),
    }
}

//! Adapter for the backend template service.
//!
//! The service describes a template as a discipline / note-type pair with a
//! list of descriptively named sections. This module maps that shape onto a
//! [`TemplateConfig`], resolving section names to component tags and
//! recording which sections the renderer would have to skip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;
use ts_rs::TS;

use clinify_core::components::{ComponentTag, component_for_section_name};
use clinify_core::models::section::{FieldRules, SectionDescriptor};
use clinify_core::models::template::TemplateConfig;

/// Template as returned by `GET /templates/{discipline}/{note_type}`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BackendTemplate {
    #[ts(type = "string | number")]
    pub id: Value,
    pub discipline: String,
    pub note_type: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sections: Vec<BackendSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BackendSection {
    #[serde(default)]
    #[ts(type = "string | number | null")]
    pub id: Value,
    pub section_name: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[ts(type = "unknown")]
    pub form_schema: Option<Value>,
}

/// A section whose component has no registered renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnknownComponent {
    pub section_name: String,
    pub component: String,
}

/// Structural problems found while adapting a backend template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StructureReport {
    pub total_sections: usize,
    /// Sections with a resolvable, registered component.
    pub valid_sections: usize,
    pub missing_template_id: bool,
    /// Names of sections without an id.
    pub missing_ids: Vec<String>,
    /// Names of sections that resolved to no component at all.
    pub missing_components: Vec<String>,
    pub unknown_components: Vec<UnknownComponent>,
}

impl StructureReport {
    /// Whether the template can be rendered: it has an id, every section
    /// has an id, and at least one section has a registered renderer.
    pub fn is_usable(&self) -> bool {
        !self.missing_template_id && self.missing_ids.is_empty() && self.valid_sections > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdaptedTemplate {
    pub config: TemplateConfig,
    pub report: StructureReport,
}

/// Map a backend template onto a [`TemplateConfig`].
///
/// Sections are ordered by their position in the backend list (1-based).
/// Sections whose name resolves to no component are left out of the config;
/// sections with an unregistered component are kept (the renderer decides)
/// but listed in the report.
pub fn adapt_backend_template(template: &BackendTemplate) -> AdaptedTemplate {
    let template_id = key_string(&template.id);
    let mut report = StructureReport {
        total_sections: template.sections.len(),
        missing_template_id: template_id.is_empty(),
        ..StructureReport::default()
    };

    let mut sections = Vec::with_capacity(template.sections.len());
    for (index, backend) in template.sections.iter().enumerate() {
        let id = key_string(&backend.id);
        if id.is_empty() {
            warn!(section = %backend.section_name, "backend section missing id");
            report.missing_ids.push(backend.section_name.clone());
        }

        let resolved = component_for_section_name(&backend.section_name);
        let Ok(component) = ComponentTag::new(resolved) else {
            warn!(section = %backend.section_name, "backend section has no component");
            report.missing_components.push(backend.section_name.clone());
            continue;
        };

        if component.is_known() {
            report.valid_sections += 1;
        } else {
            warn!(
                section = %backend.section_name,
                component = %component,
                "unknown section component, renderer will skip it"
            );
            report.unknown_components.push(UnknownComponent {
                section_name: backend.section_name.clone(),
                component: component.to_string(),
            });
        }

        let mut extra = Map::new();
        extra.insert(
            "section_name".to_string(),
            Value::String(backend.section_name.clone()),
        );
        if let Some(schema) = &backend.form_schema {
            extra.insert("form_schema".to_string(), schema.clone());
        }

        sections.push(SectionDescriptor {
            id: Some(id).filter(|id| !id.is_empty()),
            component,
            name: None,
            icon: None,
            required: Some(backend.is_required),
            order: Some((index + 1) as f64),
            category: None,
            description: backend.description.clone(),
            rules: FieldRules::default(),
            extra,
        });
    }

    if report.valid_sections == 0 {
        warn!(template_id = %template_id, "no renderable sections in backend template");
    }

    let mut extra = Map::new();
    extra.insert(
        "discipline".to_string(),
        Value::String(template.discipline.clone()),
    );
    extra.insert(
        "note_type".to_string(),
        Value::String(template.note_type.clone()),
    );
    extra.insert("is_active".to_string(), Value::Bool(template.is_active));

    let config = TemplateConfig {
        template_id,
        name: Some(format!("{} {}", template.discipline, template.note_type)),
        description: None,
        version: None,
        navigation: None,
        sections,
        extra,
    };

    AdaptedTemplate { config, report }
}

// Backend keys arrive as strings or integers.
fn key_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

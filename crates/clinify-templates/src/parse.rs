use std::cmp::Ordering;

use serde_json::Value;
use tracing::debug;

use clinify_core::components::DEFAULT_ICON;
use clinify_core::models::section::{Section, SectionDescriptor, is_truthy};
use clinify_core::models::template::{NormalizedTemplate, TemplateConfig};

use crate::error::{ParseCause, TemplateError};
use crate::section_id::generate_section_id;

/// Raw template input: JSON text or an already-parsed value.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Text(String),
    Value(Value),
}

impl From<&str> for TemplateSource {
    fn from(text: &str) -> Self {
        TemplateSource::Text(text.to_string())
    }
}

impl From<String> for TemplateSource {
    fn from(text: String) -> Self {
        TemplateSource::Text(text)
    }
}

impl From<Value> for TemplateSource {
    fn from(value: Value) -> Self {
        TemplateSource::Value(value)
    }
}

/// Receives parse failures before they are returned to the caller.
pub trait ParseReporter {
    fn report(&self, error: &TemplateError);
}

/// Emits each failure as a `tracing` error event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ParseReporter for TracingReporter {
    fn report(&self, error: &TemplateError) {
        tracing::error!(error = %error, "error parsing template config");
    }
}

/// Drops failures; the error is still returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ParseReporter for SilentReporter {
    fn report(&self, _error: &TemplateError) {}
}

/// Parse, validate and normalize a raw template, reporting failures through
/// [`TracingReporter`].
pub fn parse_template_config(
    raw: impl Into<TemplateSource>,
) -> Result<NormalizedTemplate, TemplateError> {
    parse_template_config_with(raw, &TracingReporter)
}

/// Parse, validate and normalize a raw template.
///
/// Every value accepted by [`is_valid_template_config`] normalizes:
/// optional fields of an unexpected JSON type are read as absent (numbers
/// in text fields keep their spelling). Malformed JSON and invalid shapes
/// come back as [`TemplateError::Parsing`] carrying the original cause,
/// after being handed to `reporter`.
pub fn parse_template_config_with(
    raw: impl Into<TemplateSource>,
    reporter: &dyn ParseReporter,
) -> Result<NormalizedTemplate, TemplateError> {
    let result = parse_source(raw.into());
    if let Err(error) = &result {
        reporter.report(error);
    }
    result
}

fn parse_source(source: TemplateSource) -> Result<NormalizedTemplate, TemplateError> {
    let value = match source {
        TemplateSource::Text(text) => serde_json::from_str(&text).map_err(ParseCause::Json)?,
        TemplateSource::Value(value) => value,
    };

    if !is_valid_template_config(&value) {
        return Err(ParseCause::InvalidShape.into());
    }

    let config: TemplateConfig = serde_json::from_value(value).map_err(ParseCause::Decode)?;
    Ok(normalize_sections(config))
}

/// Normalize an already-typed template, e.g. the output of a merge.
///
/// Applies the same shape rules as [`is_valid_template_config`].
pub fn normalize_template(config: &TemplateConfig) -> Result<NormalizedTemplate, TemplateError> {
    let well_formed = !config.template_id.is_empty()
        && !config.sections.is_empty()
        && config
            .sections
            .iter()
            .all(|s| !s.component.as_str().is_empty() && s.order.is_some());

    if !well_formed {
        return Err(ParseCause::InvalidShape.into());
    }
    Ok(normalize_sections(config.clone()))
}

/// Whether a JSON value is a well-formed template configuration.
///
/// Requires an object with a non-empty string `templateId` and a non-empty
/// `sections` array whose entries are objects with a non-empty string
/// `component` and a numeric `order`. Never panics.
pub fn is_valid_template_config(config: &Value) -> bool {
    let Some(obj) = config.as_object() else {
        return false;
    };

    match obj.get("templateId") {
        Some(Value::String(id)) if !id.is_empty() => {}
        _ => return false,
    }

    let Some(Value::Array(sections)) = obj.get("sections") else {
        return false;
    };
    if sections.is_empty() {
        return false;
    }

    sections.iter().all(is_valid_section)
}

fn is_valid_section(section: &Value) -> bool {
    let Some(obj) = section.as_object() else {
        return false;
    };

    let has_component = matches!(obj.get("component"), Some(Value::String(c)) if !c.is_empty());
    let has_identifier = has_component || obj.get("id").is_some_and(is_truthy);
    let has_order = obj.get("order").is_some_and(Value::is_number);

    has_component && has_identifier && has_order
}

/// Stable sort by `order`, missing orders sorting as 0.
pub(crate) fn sort_by_order(sections: &mut [SectionDescriptor]) {
    sections.sort_by(|a, b| {
        a.sort_key()
            .partial_cmp(&b.sort_key())
            .unwrap_or(Ordering::Equal)
    });
}

fn normalize_sections(config: TemplateConfig) -> NormalizedTemplate {
    let mut sections = config.sections;
    sort_by_order(&mut sections);
    let sections: Vec<Section> = sections.into_iter().map(normalize_section).collect();

    debug!(
        template_id = %config.template_id,
        sections = sections.len(),
        "normalized template config"
    );

    NormalizedTemplate {
        template_id: config.template_id,
        name: config.name,
        description: config.description,
        version: config.version,
        navigation: config.navigation,
        sections,
        extra: config.extra,
    }
}

fn normalize_section(section: SectionDescriptor) -> Section {
    let id = section
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| generate_section_id(section.component.as_str()));
    let name = section
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| section.component.short_name());
    let icon = section
        .icon
        .filter(|icon| !icon.is_empty())
        .unwrap_or_else(|| DEFAULT_ICON.to_string());
    let order = section.order.filter(|o| *o != 0.0 && !o.is_nan()).unwrap_or(0.0);

    Section {
        id,
        component: section.component,
        name,
        icon,
        required: section.required.unwrap_or(false),
        order,
        category: section.category,
        description: section.description,
        rules: section.rules,
        extra: section.extra,
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use super::lenient;
use crate::components::ComponentTag;

/// Category assigned to sections that declare none.
pub const DEFAULT_CATEGORY: &str = "general";

/// Field rules a section declares for its submitted form data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldRules {
    /// Fields that must be present and non-empty.
    #[serde(default, deserialize_with = "lenient::names", skip_serializing_if = "Vec::is_empty")]
    pub required_fields: Vec<String>,
    /// Expected value kind per field (`"string"`, `"number"`, `"boolean"`,
    /// `"object"` or `"array"`). Order is preserved from the source JSON.
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Map::is_empty")]
    #[ts(type = "Record<string, string>")]
    pub field_types: Map<String, Value>,
}

/// A note section as received from a template source, generated by
/// defaults, or produced by a merge. Display defaults are not yet filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionDescriptor {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub component: ComponentTag,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub rules: FieldRules,
    /// Keys the core does not interpret, carried through unchanged.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl SectionDescriptor {
    /// A bare descriptor with only the renderer and sort key set.
    pub fn new(component: ComponentTag, order: f64) -> Self {
        Self {
            id: None,
            component,
            name: None,
            icon: None,
            required: None,
            order: Some(order),
            category: None,
            description: None,
            rules: FieldRules::default(),
            extra: Map::new(),
        }
    }

    /// Sort key; a missing order sorts as 0.
    pub fn sort_key(&self) -> f64 {
        self.order.unwrap_or(0.0)
    }
}

/// A normalized section: identifier, display name, icon and required flag
/// are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub component: ComponentTag,
    pub name: String,
    pub icon: String,
    pub required: bool,
    pub order: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub rules: FieldRules,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl From<Section> for SectionDescriptor {
    fn from(section: Section) -> Self {
        Self {
            id: Some(section.id),
            component: section.component,
            name: Some(section.name),
            icon: Some(section.icon),
            required: Some(section.required),
            order: Some(section.order),
            category: section.category,
            description: section.description,
            rules: section.rules,
            extra: section.extra,
        }
    }
}

/// Read access shared by raw and normalized sections, so query helpers can
/// run on either form.
pub trait SectionView {
    fn component(&self) -> &ComponentTag;
    fn name(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
    fn category(&self) -> Option<&str>;
    fn required(&self) -> Option<bool>;

    /// The declared category, or [`DEFAULT_CATEGORY`].
    fn category_or_default(&self) -> &str {
        self.category().unwrap_or(DEFAULT_CATEGORY)
    }
}

impl SectionView for SectionDescriptor {
    fn component(&self) -> &ComponentTag {
        &self.component
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn required(&self) -> Option<bool> {
        self.required
    }
}

impl SectionView for Section {
    fn component(&self) -> &ComponentTag {
        &self.component
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn required(&self) -> Option<bool> {
        Some(self.required)
    }
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// `required` is coerced from any JSON value, so `"yes"` or `1` count as true.
fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Some(is_truthy(&value)))
}

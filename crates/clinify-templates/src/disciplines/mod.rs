pub mod general;
pub mod occupational;
pub mod physical;
pub mod speech;

use clinify_core::components::ComponentTag;
use clinify_core::models::section::{FieldRules, SectionDescriptor};
use serde_json::Map;

/// Built-in section row. Default tables set every display field except the
/// icon, and state `required` explicitly.
pub(crate) fn section(
    id: &str,
    component: &'static str,
    name: &str,
    order: f64,
    required: bool,
) -> SectionDescriptor {
    SectionDescriptor {
        id: Some(id.to_string()),
        component: ComponentTag::from_static(component),
        name: Some(name.to_string()),
        icon: None,
        required: Some(required),
        order: Some(order),
        category: None,
        description: None,
        rules: FieldRules::default(),
        extra: Map::new(),
    }
}

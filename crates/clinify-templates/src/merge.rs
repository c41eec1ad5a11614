use std::borrow::Cow;

use clinify_core::models::navigation::NavigationOptions;
use clinify_core::models::section::SectionDescriptor;
use clinify_core::models::template::{TemplateConfig, TemplateOverride};

use crate::parse::sort_by_order;

/// Layer a partial override over a default template.
///
/// Without an override the default is returned as-is. Otherwise every key
/// set on the override wins, sections are the default's followed by the
/// override's (stable-sorted by `order`), and navigation options are merged
/// per option. Section defaults are *not* filled in; pass the result
/// through [`crate::normalize_template`] for that.
pub fn merge_template_config<'a>(
    default: &'a TemplateConfig,
    custom: Option<&TemplateOverride>,
) -> Cow<'a, TemplateConfig> {
    let Some(custom) = custom else {
        return Cow::Borrowed(default);
    };

    let mut sections: Vec<SectionDescriptor> = default
        .sections
        .iter()
        .chain(&custom.sections)
        .cloned()
        .collect();
    sort_by_order(&mut sections);

    let unset = NavigationOptions::default();
    let navigation = default
        .navigation
        .as_ref()
        .unwrap_or(&unset)
        .merged_with(custom.navigation.as_ref().unwrap_or(&unset));

    let mut extra = default.extra.clone();
    for (key, value) in &custom.extra {
        extra.insert(key.clone(), value.clone());
    }

    Cow::Owned(TemplateConfig {
        template_id: custom
            .template_id
            .clone()
            .unwrap_or_else(|| default.template_id.clone()),
        name: custom.name.clone().or_else(|| default.name.clone()),
        description: custom
            .description
            .clone()
            .or_else(|| default.description.clone()),
        version: custom.version.clone().or_else(|| default.version.clone()),
        navigation: Some(navigation),
        sections,
        extra,
    })
}

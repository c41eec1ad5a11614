use serde_json::{Map, Number};

use clinify_core::models::navigation::NavigationOptions;
use clinify_core::models::template::TemplateConfig;

use crate::disciplines::general::General;
use crate::{DisciplineTemplate, get_discipline};

pub const DEFAULT_VERSION: &str = "1.0.0";

/// Autosave period of default templates, in milliseconds.
pub const DEFAULT_AUTO_SAVE_INTERVAL: u64 = 30_000;

/// Navigation options of every generated default template.
pub fn default_navigation() -> NavigationOptions {
    NavigationOptions {
        allow_skip: Some(true),
        show_progress: Some(true),
        auto_save: Some(true),
        auto_save_interval: Some(Number::from(DEFAULT_AUTO_SAVE_INTERVAL)),
        extra: Map::new(),
    }
}

/// Build the default template for a discipline and note type.
///
/// The section table is chosen by the upper-cased discipline code; codes
/// without a table (including assistant codes such as "PTA") get the
/// general single-section template. Section ids are stable: stored note
/// data is keyed by them.
pub fn generate_default_config(discipline: &str, note_type: &str) -> TemplateConfig {
    let table: Box<dyn DisciplineTemplate> =
        get_discipline(&discipline.to_uppercase()).unwrap_or_else(|| Box::new(General));

    TemplateConfig {
        template_id: format!("{}_{}", discipline.to_lowercase(), note_type.to_lowercase()),
        name: Some(format!("{discipline} {note_type}")),
        description: Some(format!("{discipline} {note_type} template")),
        version: Some(DEFAULT_VERSION.to_string()),
        navigation: Some(default_navigation()),
        sections: table.sections().to_vec(),
        extra: Map::new(),
    }
}

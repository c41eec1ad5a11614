use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use ts_rs::TS;

use super::lenient;

/// How the note form moves between sections. Every option is optional so a
/// partial override can be layered on top of a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NavigationOptions {
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub allow_skip: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub show_progress: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub auto_save: Option<bool>,
    /// Autosave period in milliseconds, kept as written.
    #[serde(
        default,
        deserialize_with = "lenient::raw_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(type = "number | null")]
    pub auto_save_interval: Option<Number>,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl NavigationOptions {
    /// Shallow merge: every option set in `overrides` wins, the rest is kept.
    pub fn merged_with(&self, overrides: &NavigationOptions) -> NavigationOptions {
        let mut extra = self.extra.clone();
        for (key, value) in &overrides.extra {
            extra.insert(key.clone(), value.clone());
        }

        NavigationOptions {
            allow_skip: overrides.allow_skip.or(self.allow_skip),
            show_progress: overrides.show_progress.or(self.show_progress),
            auto_save: overrides.auto_save.or(self.auto_save),
            auto_save_interval: overrides
                .auto_save_interval
                .clone()
                .or_else(|| self.auto_save_interval.clone()),
            extra,
        }
    }
}

//! clinify-templates
//!
//! Clinical note template engine. Pure functions over borrowed inputs, no
//! I/O. Normalizes raw template configurations, merges overrides, builds
//! discipline defaults, queries section lists and checks submitted section
//! data.

pub mod backend;
pub mod data;
pub mod defaults;
pub mod disciplines;
pub mod error;
pub mod merge;
pub mod parse;
pub mod progress;
pub mod query;
pub mod section_id;

use clinify_core::models::section::SectionDescriptor;

pub use data::validate_section_data;
pub use defaults::generate_default_config;
pub use error::{ParseCause, TemplateError};
pub use merge::merge_template_config;
pub use parse::{is_valid_template_config, normalize_template, parse_template_config};
pub use query::{SectionFilter, SectionGroups, filter_sections, group_sections_by_category};
pub use section_id::generate_section_id;

/// A therapy discipline with its own default note sections.
pub trait DisciplineTemplate: Send + Sync {
    /// Upper-case discipline code (e.g., "PT", "OT").
    fn code(&self) -> &str;

    /// Human-readable discipline name.
    fn name(&self) -> &str;

    /// Default sections, in display order.
    fn sections(&self) -> &[SectionDescriptor];
}

/// Return every discipline with a dedicated section table.
pub fn all_disciplines() -> Vec<Box<dyn DisciplineTemplate>> {
    vec![
        Box::new(disciplines::physical::PhysicalTherapy),
        Box::new(disciplines::occupational::OccupationalTherapy),
        Box::new(disciplines::speech::SpeechTherapy),
    ]
}

/// Look up a discipline by its exact code.
pub fn get_discipline(code: &str) -> Option<Box<dyn DisciplineTemplate>> {
    all_disciplines().into_iter().find(|d| d.code() == code)
}

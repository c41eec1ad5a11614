use clinify_core::models::section::SectionDescriptor;

use super::section;
use crate::DisciplineTemplate;

/// Fallback for any discipline without its own table, including the
/// assistant codes (PTA, COTA, STA): a single subjective section.
pub struct General;

impl DisciplineTemplate for General {
    fn code(&self) -> &str {
        ""
    }

    fn name(&self) -> &str {
        "General"
    }

    fn sections(&self) -> &[SectionDescriptor] {
        static SECTIONS: std::sync::LazyLock<Vec<SectionDescriptor>> =
            std::sync::LazyLock::new(|| {
                vec![section("subjective", "SubjectiveSection", "Subjective", 1.0, true)]
            });
        &SECTIONS
    }
}

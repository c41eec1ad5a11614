use clinify_core::models::section::SectionDescriptor;

use super::section;
use crate::DisciplineTemplate;

/// Occupational therapy. Every section is required.
pub struct OccupationalTherapy;

impl DisciplineTemplate for OccupationalTherapy {
    fn code(&self) -> &str {
        "OT"
    }

    fn name(&self) -> &str {
        "Occupational Therapy"
    }

    fn sections(&self) -> &[SectionDescriptor] {
        static SECTIONS: std::sync::LazyLock<Vec<SectionDescriptor>> =
            std::sync::LazyLock::new(|| {
                vec![
                    section("subjective", "SubjectiveSection", "Subjective", 1.0, true),
                    section("cognitive", "CognitiveStatusSection", "Cognitive Status", 2.0, true),
                    section("adl", "ADLSelfCareSection", "ADL / Self Care", 3.0, true),
                ]
            });
        &SECTIONS
    }
}

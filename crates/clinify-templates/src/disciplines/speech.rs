use clinify_core::models::section::SectionDescriptor;

use super::section;
use crate::DisciplineTemplate;

/// Speech therapy.
pub struct SpeechTherapy;

impl DisciplineTemplate for SpeechTherapy {
    fn code(&self) -> &str {
        "ST"
    }

    fn name(&self) -> &str {
        "Speech Therapy"
    }

    fn sections(&self) -> &[SectionDescriptor] {
        static SECTIONS: std::sync::LazyLock<Vec<SectionDescriptor>> =
            std::sync::LazyLock::new(|| {
                vec![
                    section("subjective", "SubjectiveSection", "Subjective", 1.0, true),
                    section("cognitive", "CognitiveStatusSection", "Cognitive Status", 2.0, true),
                ]
            });
        &SECTIONS
    }
}

use clinify_core::models::section::SectionDescriptor;

use super::section;
use crate::DisciplineTemplate;

/// Physical therapy: full evaluation flow from subjective report through
/// vitals, pain, cognition, home setting, gait, strength and balance.
pub struct PhysicalTherapy;

impl DisciplineTemplate for PhysicalTherapy {
    fn code(&self) -> &str {
        "PT"
    }

    fn name(&self) -> &str {
        "Physical Therapy"
    }

    fn sections(&self) -> &[SectionDescriptor] {
        static SECTIONS: std::sync::LazyLock<Vec<SectionDescriptor>> =
            std::sync::LazyLock::new(|| {
                vec![
                    section("subjective", "SubjectiveSection", "Subjective", 1.0, true),
                    section("vitals", "VitalsSection", "Vitals", 2.0, false),
                    section("pain", "PainSection", "Pain Assessment", 3.0, false),
                    section("cognitive", "CognitiveStatusSection", "Cognitive Status", 4.0, false),
                    section("living", "LivingArrangementsSection", "Living Arrangements", 5.0, false),
                    section("mobility", "GaitMobilitySection", "Gait / Mobility", 6.0, false),
                    section("muscle", "MuscleStrengthSection", "Muscle Strength/ROM", 7.0, false),
                    section("balance", "BalanceSection", "Balance", 8.0, false),
                ]
            });
        &SECTIONS
    }
}

//! Section component tags and the lookup tables around them.
//!
//! A component tag names the UI renderer for a section. The core treats the
//! tag as opaque apart from the tables here: the renderer registry known to
//! the frontend, the descriptive section names the backend sends, and the
//! icon used for each section in note navigation.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Icon used when a section declares none and no table entry matches.
pub const DEFAULT_ICON: &str = "fas fa-file-alt";

/// Key of the renderer that draws a section, e.g. `"VitalsSection"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ComponentTag(String);

impl ComponentTag {
    /// Build a tag, rejecting empty names.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::MissingField("component".to_string()));
        }
        Ok(Self(name))
    }

    /// Tag for a name from a built-in table. The name must be non-empty.
    pub fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag with its first `"Section"` removed, used as a display name.
    pub fn short_name(&self) -> String {
        self.0.replacen("Section", "", 1)
    }

    /// Whether the frontend has a renderer registered under this tag.
    pub fn is_known(&self) -> bool {
        is_known_component(&self.0)
    }
}

impl fmt::Display for ComponentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Renderers registered in the note-rendering UI.
pub const KNOWN_COMPONENTS: &[&str] = &[
    "SubjectiveSection",
    "VitalsSkillsSection",
    "PainSkillsSection",
    "MedicationSection",
    "LivingArrangementsSkillsSection",
    "GaitMobilityTrainingSkillsSection",
    "MuscleStrengthROMSkillsSection",
    "BalanceSkillsSection",
    "TransfersFunctionalIndependenceSkillsSection",
    "ADLSelfCareSkillsSection",
    "AssessmentJustificationSkillsSection",
    "CognitiveStatusSkillsSection",
    "SensorySkillsSection",
    "EquipmentSkillsSection",
    "ProstheticOrthoticSkillsSection",
    "PatientCaregiverEducationSkillsSection",
    "SkilledCareProvidedThisVisitSkillsSection",
    "ProblemListFunctionalLimitationsSkillsSection",
    "RehabPotentialSkillsSection",
    "TreatmentAsToleratedBasicPOCSkillsSection",
    "ShortLongTermGoalsSkillsSection",
    "StandardizedTestsSection",
    "TreatmentInterventionsSection",
    "SignatureSection",
];

pub fn is_known_component(name: &str) -> bool {
    KNOWN_COMPONENTS.contains(&name)
}

/// Resolve a backend section name to a component tag.
///
/// The backend sends either a descriptive title ("Vitals",
/// "Short & Long Term Goals") or a legacy component name. Names with no
/// alias are returned unchanged.
pub fn component_for_section_name(section_name: &str) -> &str {
    match section_name {
        "Transfers / Functional Independence" | "TransfersFunctionalIndependence" => {
            "TransfersFunctionalIndependenceSkillsSection"
        }
        "ADL / Self Care Skills" | "ADLSelfCare" => "ADLSelfCareSkillsSection",
        "Assessment / Justification" | "AssessmentJustificationSection" => {
            "AssessmentJustificationSkillsSection"
        }
        "Balance" | "BalanceSection" => "BalanceSkillsSection",
        "Vitals" => "VitalsSkillsSection",
        "Pain" => "PainSkillsSection",
        "Living Arrangements" | "LivingArrangements" => "LivingArrangementsSkillsSection",
        "Cognitive Status / Comprehension" => "CognitiveStatusSkillsSection",
        "Sensory" => "SensorySkillsSection",
        "Equipment" => "EquipmentSkillsSection",
        "Gait / Mobility Training (Eval)" | "GaitMobility" => "GaitMobilityTrainingSkillsSection",
        "Muscle Strength/ROM" | "MuscleStrengthSection" => "MuscleStrengthROMSkillsSection",
        "Prosthetic And Orthotic" => "ProstheticOrthoticSkillsSection",
        "Patient / Caregiver Education" | " Patient / Caregiver Education  " => {
            "PatientCaregiverEducationSkillsSection"
        }
        "Skilled Care Provided This Visit" | "SkilledCareSection" => {
            "SkilledCareProvidedThisVisitSkillsSection"
        }
        "Problem List / Functional Limitations" | "ProblemListSection" => {
            "ProblemListFunctionalLimitationsSkillsSection"
        }
        "Rehab Potential" | "RehabPotentialSection" => "RehabPotentialSkillsSection",
        "Treatment as Tolerated/Basic POC" => "TreatmentAsToleratedBasicPOCSkillsSection",
        "Short & Long Term Goals" | "Goals" => "ShortLongTermGoalsSkillsSection",
        "Initial Evaluation" | "Subjective" => "SubjectiveSection",
        "Medication" => "MedicationSection",
        "StandardizedTests" => "StandardizedTestsSection",
        "TreatmentInterventions" => "TreatmentInterventionsSection",
        "Signature" => "SignatureSection",
        other => other,
    }
}

/// Navigation icon for a section, keyed by its backend section name or
/// short component name.
pub fn icon_for_section(key: &str) -> Option<&'static str> {
    let icon = match key {
        "Vitals" => "fas fa-heartbeat",
        "TransfersFunctionalIndependence" => "fas fa-walking",
        "Pain" => "fas fa-exclamation-triangle",
        "Subjective" => "fas fa-user-md",
        "Medication" => "fas fa-pills",
        "LivingArrangements" => "fas fa-home",
        "GaitMobility" => "fas fa-walking",
        "MuscleStrengthSection" => "fas fa-dumbbell",
        "BalanceSection" => "fas fa-balance-scale",
        "ADLSelfCare" => "fas fa-hands",
        "StandardizedTests" => "fas fa-clipboard-check",
        "ProblemListSection" => "fas fa-list-ul",
        "AssessmentJustificationSection" => "fas fa-stethoscope",
        "RehabPotentialSection" => "fas fa-chart-line",
        "TreatmentInterventions" => "fas fa-therapy",
        "SkilledCareSection" => "fas fa-user-nurse",
        "Goals" => "fas fa-bullseye",
        "Signature" => "fas fa-signature",
        _ => return None,
    };
    Some(icon)
}

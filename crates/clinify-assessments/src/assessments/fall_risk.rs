use serde_json::Value;

use super::flag;
use crate::Assessment;
use crate::error::AssessmentError;
use crate::scoring::{Interpretation, Item};

/// Points per ticked risk factor.
pub const FACTOR_POINTS: u32 = 5;

/// Lower bound (inclusive) of each risk level, highest first.
pub const RISK_LEVELS: &[(u32, &str)] = &[
    (75, "Severe Risk"),
    (50, "High Risk"),
    (25, "Moderate Risk"),
];

const PATIENT_FACTORS: &[(&str, &str)] = &[
    ("historyOfFalls", "History of falls"),
    ("sensoryDeficit", "Sensory deficit"),
    ("ageOver65", "Age over 65"),
    ("multipleCoexistingDiagnoses", "Multiple coexisting diagnoses"),
    ("confusion", "Confusion"),
    ("impairedJudgment", "Impaired judgment"),
    ("decreasedCooperation", "Decreased cooperation"),
    ("increasedAnxiety", "Increased anxiety"),
    ("painAffectingFunction", "Pain affecting function"),
    ("unableToAmbulate", "Unable to ambulate independently"),
    ("gaitBalanceProblems", "Gait or balance problems"),
    ("incontinence", "Incontinence or urgency"),
    ("cardiovascularRespiratory", "Cardiovascular or respiratory disease"),
    ("posturalHypotension", "Postural hypotension"),
    ("alcoholUse", "Alcohol use"),
    ("medicationsAffecting", "Medications affecting blood pressure or consciousness"),
];

const ENVIRONMENTAL_FACTORS: &[(&str, &str)] = &[
    ("homeSafetyIssues", "Home safety issues"),
    ("lackOfHomeModifications", "Lack of home modifications"),
];

/// Fall risk screen: every ticked patient or environmental factor adds 5.
/// Organizational guideline checkboxes are recorded but not scored.
pub struct FallRisk;

impl Assessment for FallRisk {
    fn id(&self) -> &str {
        "fall_risk"
    }

    fn name(&self) -> &str {
        "Fall Risk Assessment"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let patient = PATIENT_FACTORS
                .iter()
                .map(|(id, name)| flag("patientFactors", id, name, FACTOR_POINTS));
            let environmental = ENVIRONMENTAL_FACTORS
                .iter()
                .map(|(id, name)| flag("environmentalFactors", id, name, FACTOR_POINTS));
            patient.chain(environmental).collect()
        });
        &ITEMS
    }

    fn interpret(&self, total: u32, _responses: &Value) -> Result<Interpretation, AssessmentError> {
        let level = RISK_LEVELS
            .iter()
            .find(|(lower, _)| total >= *lower)
            .map_or("Low Risk", |&(_, level)| level);
        Ok(Interpretation::band(level))
    }
}

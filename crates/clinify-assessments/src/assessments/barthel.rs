use serde_json::Value;

use super::choice;
use crate::Assessment;
use crate::error::AssessmentError;
use crate::scoring::{Interpretation, Item};

/// Upper bound (inclusive) of each dependency band; totals above the last
/// bound are "Independence".
pub const DEPENDENCY_BANDS: &[(u32, &str)] = &[
    (20, "Total Dependency"),
    (35, "Severe Dependency"),
    (55, "Moderate Dependency"),
    (90, "Slight Dependency"),
];

/// Barthel Index of activities of daily living.
/// 10 items scored in steps of 5. Total 0–100.
pub struct Barthel;

impl Assessment for Barthel {
    fn id(&self) -> &str {
        "barthel"
    }

    fn name(&self) -> &str {
        "Barthel Index"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let two = [("0", 0), ("5", 5)];
            let three = [("0", 0), ("5", 5), ("10", 10)];
            let four = [("0", 0), ("5", 5), ("10", 10), ("15", 15)];

            vec![
                choice("feeding", "Feeding", &three),
                choice("bathing", "Bathing", &two),
                choice("grooming", "Grooming", &two),
                choice("dressing", "Dressing", &three),
                choice("bowels", "Bowels", &three),
                choice("bladder", "Bladder", &three),
                choice("toiletUse", "Toilet Use", &three),
                choice("transfers", "Transfers (Bed to Chair and Back)", &four),
                choice("mobility", "Mobility (On Level Surfaces)", &four),
                choice("stairs", "Stairs", &three),
            ]
        });
        &ITEMS
    }

    fn interpret(&self, total: u32, _responses: &Value) -> Result<Interpretation, AssessmentError> {
        let level = DEPENDENCY_BANDS
            .iter()
            .find(|(upper, _)| total <= *upper)
            .map_or("Independence", |&(_, level)| level);
        Ok(Interpretation::band(level))
    }
}

use serde_json::Value;

use super::{choice, correct};
use crate::Assessment;
use crate::error::AssessmentError;
use crate::scoring::{Interpretation, Item, is_unanswered};

pub const HIGH_SCHOOL: &str = "High School Education";
pub const LESS_THAN_HIGH_SCHOOL: &str = "Less than High School Education";

/// Totals at or above the cutoff are "Normal".
pub const HIGH_SCHOOL_CUTOFF: u32 = 27;
pub const LESS_THAN_HIGH_SCHOOL_CUTOFF: u32 = 25;

/// Saint Louis University Mental Status exam. The cutoff depends on the
/// `educationLevel` answer, which defaults to high school.
pub struct Slums;

impl Assessment for Slums {
    fn id(&self) -> &str {
        "slums"
    }

    fn name(&self) -> &str {
        "SLUMS"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![
                correct("dayOfWeek", "What day of the week is it?", 1),
                correct("year", "What is the year?", 1),
                correct("state", "What state are we in?", 1),
                choice(
                    "objectsRemembered",
                    "Objects remembered",
                    &[
                        ("5 Objects Correct", 5),
                        ("4 Objects Correct", 4),
                        ("3 Objects Correct", 3),
                        ("2 Objects Correct", 2),
                        ("1 Object Correct", 1),
                        ("0 Objects Correct", 0),
                    ],
                ),
                correct("moneySpent", "How much did you spend?", 2),
                correct("moneyLeft", "How much do you have left?", 2),
                choice(
                    "animalsNamed",
                    "Animals named in one minute",
                    &[
                        ("0-4 animals", 0),
                        ("5-9 animals", 1),
                        ("10-14 animals", 2),
                        ("15+ animals", 3),
                    ],
                ),
                correct("hourMarkers", "Clock: hour markers", 2),
                correct("timeCorrect", "Clock: time", 2),
                correct("trianglePoint", "Point to the triangle", 1),
                correct("largestFigure", "Largest figure", 1),
                correct("femalesName", "Story: the woman's name", 2),
                correct("workType", "Story: her work", 2),
                correct("backToWork", "Story: when she went back to work", 2),
                correct("stateOfResidence", "Story: her state", 2),
                correct("number87", "Backwards: 87", 1),
                correct("number649", "Backwards: 649", 1),
                correct("number8537", "Backwards: 8537", 1),
            ]
        });
        &ITEMS
    }

    fn interpret(&self, total: u32, responses: &Value) -> Result<Interpretation, AssessmentError> {
        let cutoff = match responses.get("educationLevel") {
            None => HIGH_SCHOOL_CUTOFF,
            Some(level) if is_unanswered(level) => HIGH_SCHOOL_CUTOFF,
            Some(Value::String(level)) if level == HIGH_SCHOOL => HIGH_SCHOOL_CUTOFF,
            Some(Value::String(level)) if level == LESS_THAN_HIGH_SCHOOL => {
                LESS_THAN_HIGH_SCHOOL_CUTOFF
            }
            Some(other) => {
                return Err(AssessmentError::InvalidResponse {
                    assessment_id: self.id().to_string(),
                    item_id: "educationLevel".to_string(),
                    value: other.to_string(),
                });
            }
        };

        let level = if total >= cutoff {
            "Normal"
        } else {
            "Cognitive Impairment"
        };
        Ok(Interpretation {
            level: level.to_string(),
            cutoff: Some(cutoff),
        })
    }
}

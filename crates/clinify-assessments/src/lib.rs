//! clinify-assessments
//!
//! Standardized test scoring for the note's standardized-tests section.
//! Pure data: each assessment is a fixed table of items whose answers are
//! worth fixed points, plus the band or cutoff rule that interprets the
//! total.

pub mod assessments;
pub mod error;
pub mod scoring;

use serde_json::Value;

use error::AssessmentError;
use scoring::{AssessmentScore, Interpretation, Item, ItemScore, is_unanswered};

/// Trait implemented by each scored standardized assessment.
pub trait Assessment: Send + Sync {
    /// Unique identifier (e.g., "barthel", "slums").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Barthel Index").
    fn name(&self) -> &str;

    /// The scored items, in form order.
    fn items(&self) -> &[Item];

    /// Highest reachable total.
    fn max_score(&self) -> u32 {
        self.items().iter().map(Item::max_points).sum()
    }

    /// Interpret a total. Some assessments read context that is not itself
    /// scored (such as the patient's education level) from `responses`.
    fn interpret(&self, total: u32, responses: &Value) -> Result<Interpretation, AssessmentError>;

    /// Score a response object keyed by item id (or by group, then item id).
    ///
    /// Unanswered items count as 0 and are listed in the result. An answer
    /// that is not one of an item's options fails the whole score.
    fn score(&self, responses: &Value) -> Result<AssessmentScore, AssessmentError> {
        if !responses.is_object() {
            return Err(AssessmentError::NotAnObject {
                assessment_id: self.id().to_string(),
            });
        }

        let mut items = Vec::with_capacity(self.items().len());
        let mut unanswered = Vec::new();
        let mut total = 0;

        for item in self.items() {
            let response = item.response_in(responses);
            let points = match response {
                Some(value) if !is_unanswered(value) => {
                    item.points_for(value)
                        .ok_or_else(|| AssessmentError::InvalidResponse {
                            assessment_id: self.id().to_string(),
                            item_id: item.id.clone(),
                            value: value.to_string(),
                        })?
                }
                _ => {
                    unanswered.push(item.id.clone());
                    0
                }
            };

            total += points;
            items.push(ItemScore {
                item_id: item.id.clone(),
                points,
            });
        }

        Ok(AssessmentScore {
            assessment_id: self.id().to_string(),
            total,
            max_score: self.max_score(),
            interpretation: self.interpret(total, responses)?,
            items,
            unanswered,
        })
    }
}

/// Return all registered assessments.
pub fn all_assessments() -> Vec<Box<dyn Assessment>> {
    vec![
        Box::new(assessments::barthel::Barthel),
        Box::new(assessments::slums::Slums),
        Box::new(assessments::fall_risk::FallRisk),
    ]
}

/// Look up an assessment by ID.
pub fn get_assessment(id: &str) -> Option<Box<dyn Assessment>> {
    all_assessments().into_iter().find(|a| a.id() == id)
}

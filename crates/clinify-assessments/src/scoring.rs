use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// One selectable answer and the points it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemOption {
    pub value: String,
    pub points: u32,
}

/// How an item's answer is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ItemKind {
    /// One of a fixed set of answers. Numeric answers match the option
    /// with the same spelling ("10" and 10 are the same answer).
    Choice { options: Vec<ItemOption> },
    /// A checkbox worth `points` when ticked.
    Flag { points: u32 },
}

/// A scored item of an assessment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Key of the nested response object holding this item, if any.
    pub group: Option<String>,
    pub kind: ItemKind,
}

impl Item {
    pub fn max_points(&self) -> u32 {
        match &self.kind {
            ItemKind::Choice { options } => options.iter().map(|o| o.points).max().unwrap_or(0),
            ItemKind::Flag { points } => *points,
        }
    }

    /// This item's answer within a response object.
    pub fn response_in<'a>(&self, responses: &'a Value) -> Option<&'a Value> {
        match &self.group {
            Some(group) => responses.get(group)?.get(&self.id),
            None => responses.get(&self.id),
        }
    }

    /// Points for an answer, or `None` when the answer is not one this item
    /// accepts.
    pub fn points_for(&self, answer: &Value) -> Option<u32> {
        match &self.kind {
            ItemKind::Choice { options } => {
                let answer = match answer {
                    Value::String(s) => s.trim().to_string(),
                    Value::Number(n) => n.to_string(),
                    _ => return None,
                };
                options.iter().find(|o| o.value == answer).map(|o| o.points)
            }
            ItemKind::Flag { points } => answer.as_bool().map(|ticked| if ticked { *points } else { 0 }),
        }
    }
}

/// Whether an answer counts as not given: `null` or a blank string.
pub fn is_unanswered(answer: &Value) -> bool {
    match answer {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Interpretation of a total: the band it falls in and, for cutoff-based
/// assessments, the cutoff applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub level: String,
    pub cutoff: Option<u32>,
}

impl Interpretation {
    pub fn band(level: &str) -> Self {
        Self {
            level: level.to_string(),
            cutoff: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemScore {
    pub item_id: String,
    pub points: u32,
}

/// The scored form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentScore {
    pub assessment_id: String,
    pub total: u32,
    pub max_score: u32,
    pub interpretation: Interpretation,
    /// Points per item, in form order.
    pub items: Vec<ItemScore>,
    /// Ids of items with no answer; they count as 0.
    pub unanswered: Vec<String>,
}

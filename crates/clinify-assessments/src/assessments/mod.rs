pub mod barthel;
pub mod fall_risk;
pub mod slums;

use crate::scoring::{Item, ItemKind, ItemOption};

pub(crate) fn choice(id: &str, name: &str, options: &[(&str, u32)]) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        group: None,
        kind: ItemKind::Choice {
            options: options
                .iter()
                .map(|(value, points)| ItemOption {
                    value: value.to_string(),
                    points: *points,
                })
                .collect(),
        },
    }
}

/// A question answered "Correct" or "Incorrect".
pub(crate) fn correct(id: &str, name: &str, points: u32) -> Item {
    choice(id, name, &[("Correct", points), ("Incorrect", 0)])
}

pub(crate) fn flag(group: &str, id: &str, name: &str, points: u32) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        group: Some(group.to_string()),
        kind: ItemKind::Flag { points },
    }
}

use std::ops::Index;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinify_core::models::section::SectionView;

/// Criteria for [`filter_sections`]. Unset fields impose no constraint, and
/// so do empty `category` / `search` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive substring matched against name, description and
    /// component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl SectionFilter {
    pub fn matches<S: SectionView>(&self, section: &S) -> bool {
        if let Some(required) = self.required
            && section.required() != Some(required)
        {
            return false;
        }

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty())
            && section.category() != Some(category)
        {
            return false;
        }

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let term = search.to_lowercase();
            let hit = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&term));
            return hit(section.name())
                || hit(section.description())
                || hit(Some(section.component().as_str()));
        }

        true
    }
}

/// Sections matching every criterion, in input order. An absent list gives
/// an empty result.
pub fn filter_sections<'a, S: SectionView>(
    sections: Option<&'a [S]>,
    criteria: &SectionFilter,
) -> Vec<&'a S> {
    sections
        .unwrap_or_default()
        .iter()
        .filter(|s| criteria.matches(*s))
        .collect()
}

/// Sections grouped by category, in order of each category's first
/// appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroups<'a, S> {
    groups: Vec<(String, Vec<&'a S>)>,
}

impl<'a, S> SectionGroups<'a, S> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&[&'a S]> {
        self.groups
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, sections)| sections.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a S])> {
        self.groups
            .iter()
            .map(|(name, sections)| (name.as_str(), sections.as_slice()))
    }
}

impl<'a, S> Index<&str> for SectionGroups<'a, S> {
    type Output = [&'a S];

    fn index(&self, category: &str) -> &Self::Output {
        match self.get(category) {
            Some(sections) => sections,
            None => panic!("no sections in category '{category}'"),
        }
    }
}

/// Sections keyed by category, sections without one under `"general"`.
/// Categories keep first-seen order and each group keeps input order. An
/// absent list gives no groups.
pub fn group_sections_by_category<'a, S: SectionView>(
    sections: Option<&'a [S]>,
) -> SectionGroups<'a, S> {
    let mut groups: Vec<(String, Vec<&'a S>)> = Vec::new();
    for section in sections.unwrap_or_default() {
        let category = section.category_or_default();
        match groups.iter_mut().find(|(name, _)| name == category) {
            Some((_, members)) => members.push(section),
            None => groups.push((category.to_string(), vec![section])),
        }
    }
    SectionGroups { groups }
}

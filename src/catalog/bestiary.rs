//! Bestiary trait records, grouped by category

use crate::catalog::null_as_default;
use crate::core::types::{PreferredRange, TagSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which bestiary collection a trait belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitCategory {
    Attack,
    Tank,
    Utility,
}

impl TraitCategory {
    pub const ALL: [TraitCategory; 3] =
        [TraitCategory::Attack, TraitCategory::Tank, TraitCategory::Utility];

    /// Catalog file holding this category
    pub fn file_name(&self) -> &'static str {
        match self {
            TraitCategory::Attack => "bestiary_attack.json",
            TraitCategory::Tank => "bestiary_tank.json",
            TraitCategory::Utility => "bestiary_utility.json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TraitCategory::Attack => "Attack",
            TraitCategory::Tank => "Tank",
            TraitCategory::Utility => "Utility",
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional thresholds a trait places on the team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitConditions {
    #[serde(default)]
    pub min_followers: Option<u32>,
    #[serde(default)]
    pub min_slots: Option<u32>,
    #[serde(default)]
    pub preferred_range: Option<PreferredRange>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requires_poison_or_disease: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requires_chill: bool,
}

impl TraitConditions {
    /// Follower threshold; absent or zero means `default`
    pub fn min_followers_or(&self, default: u32) -> u32 {
        threshold_or(self.min_followers, default)
    }

    /// Slot threshold; absent or zero means `default`
    pub fn min_slots_or(&self, default: u32) -> u32 {
        threshold_or(self.min_slots, default)
    }

    pub fn prefers(&self, range: PreferredRange) -> bool {
        self.preferred_range.as_ref() == Some(&range)
    }
}

fn threshold_or(value: Option<u32>, default: u32) -> u32 {
    match value {
        Some(n) if n > 0 => n,
        _ => default,
    }
}

/// A passive bestiary page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestiaryTrait {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: TagSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conditions: TraitConditions,
}

impl BestiaryTrait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tags: TagSet::default(),
            conditions: TraitConditions::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_conditions(mut self, conditions: TraitConditions) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|t| self.tags.contains(*t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_conditions_is_empty_object() {
        let entry: BestiaryTrait =
            serde_json::from_str(r#"{ "name": "Sharpened Fangs", "tags": ["damage_buff"] }"#)
                .unwrap();
        assert_eq!(entry.conditions, TraitConditions::default());
        assert!(entry.description.is_empty());
        assert!(entry.has_tag("damage_buff"));
    }

    #[test]
    fn test_conditions_parse() {
        let entry: BestiaryTrait = serde_json::from_str(
            r#"{
                "name": "Pack Hunter",
                "description": "More followers, more bite",
                "tags": ["follower_count_scaling"],
                "conditions": { "minFollowers": 3, "preferredRange": "melee", "requiresChill": true }
            }"#,
        )
        .unwrap();
        assert_eq!(entry.conditions.min_followers_or(2), 3);
        assert!(entry.conditions.prefers(PreferredRange::Melee));
        assert!(!entry.conditions.prefers(PreferredRange::Ranged));
        assert!(entry.conditions.requires_chill);
        assert!(!entry.conditions.requires_poison_or_disease);
    }

    #[test]
    fn test_zero_threshold_falls_back_to_default() {
        let conditions = TraitConditions {
            min_followers: Some(0),
            min_slots: None,
            ..Default::default()
        };
        assert_eq!(conditions.min_followers_or(2), 2);
        assert_eq!(conditions.min_slots_or(3), 3);
    }

    #[test]
    fn test_category_files() {
        assert_eq!(TraitCategory::Tank.file_name(), "bestiary_tank.json");
        assert_eq!(TraitCategory::ALL.len(), 3);
        assert_eq!(TraitCategory::Utility.to_string(), "Utility");
    }
}

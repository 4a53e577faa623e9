//! Pet records as they appear in the catalog

use crate::catalog::null_as_default;
use crate::core::types::{PetClass, TagSet};
use serde::{Deserialize, Deserializer, Serialize};

/// A collectible pet
///
/// Every field except `id` and `name` may be missing from the source data
/// and falls back to a neutral value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: PetClass,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: TagSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_dmg: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_dmg: f64,
    #[serde(default = "default_underdog_scalar", deserialize_with = "null_as_scalar")]
    pub underdog_scalar: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub passive_ability: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cooldown_ability: String,
}

fn default_underdog_scalar() -> f64 {
    1.0
}

fn null_as_scalar<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(default_underdog_scalar))
}

impl Pet {
    /// Create a pet with neutral stats
    pub fn new(id: impl Into<String>, name: impl Into<String>, class: PetClass) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class,
            slots: 0,
            tags: TagSet::default(),
            min_dmg: 0.0,
            max_dmg: 0.0,
            underdog_scalar: 1.0,
            passive_ability: String::new(),
            cooldown_ability: String::new(),
        }
    }

    pub fn with_slots(mut self, slots: u32) -> Self {
        self.slots = slots;
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

    pub fn with_damage(mut self, min_dmg: f64, max_dmg: f64) -> Self {
        self.min_dmg = min_dmg;
        self.max_dmg = max_dmg;
        self
    }

    pub fn with_underdog_scalar(mut self, scalar: f64) -> Self {
        self.underdog_scalar = scalar;
        self
    }

    pub fn with_abilities(mut self, passive: impl Into<String>, cooldown: impl Into<String>) -> Self {
        self.passive_ability = passive.into();
        self.cooldown_ability = cooldown.into();
        self
    }

    /// Damage multiplier; a zero scalar counts as 1
    pub fn scalar(&self) -> f64 {
        if self.underdog_scalar == 0.0 {
            1.0
        } else {
            self.underdog_scalar
        }
    }

    /// Mean of the damage range
    pub fn avg_damage(&self) -> f64 {
        (self.min_dmg + self.max_dmg) / 2.0
    }

    /// Damage contribution to the team score
    pub fn weighted_damage(&self) -> f64 {
        self.scalar() * self.avg_damage()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn passive_mentions(&self, keyword: &str) -> bool {
        mentions(&self.passive_ability, keyword)
    }

    pub fn cooldown_mentions(&self, keyword: &str) -> bool {
        mentions(&self.cooldown_ability, keyword)
    }

    /// Either ability text mentions `keyword`
    pub fn ability_mentions(&self, keyword: &str) -> bool {
        self.passive_mentions(keyword) || self.cooldown_mentions(keyword)
    }
}

/// Case-insensitive substring test; `keyword` is expected in lowercase
fn mentions(text: &str, keyword: &str) -> bool {
    !text.is_empty() && text.to_lowercase().contains(keyword)
}

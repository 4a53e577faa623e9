//! One-pass aggregate of a resolved team

use crate::catalog::Pet;
use crate::core::types::{PetClass, TagSet};

/// Facts about a team that the scoring rules read
#[derive(Debug, Clone, Default)]
pub struct TeamProfile {
    /// Number of pets on the team
    pub followers: usize,
    /// Total slot cost
    pub slots: u32,
    /// Slot cost of Tank-class pets only
    pub tank_slots: u32,
    /// Union of every pet's tags
    pub tags: TagSet,
    /// Sum of scalar-weighted average damage
    pub raw_damage: f64,
    /// A passive ability mentions bleed
    pub bleed: bool,
    /// A cooldown ability is a barrage or breath attack
    pub aoe_ability: bool,
    /// Some ability text mentions poison or disease
    pub poison_or_disease: bool,
    /// Some ability text mentions chill
    pub chill: bool,
}

impl TeamProfile {
    pub fn from_pets(team: &[&Pet]) -> Self {
        let mut profile = TeamProfile {
            followers: team.len(),
            ..Default::default()
        };

        for pet in team {
            profile.slots = profile.slots.saturating_add(pet.slots);
            if pet.class == PetClass::Tank {
                profile.tank_slots = profile.tank_slots.saturating_add(pet.slots);
            }
            profile.tags.extend(pet.tags.iter().cloned());
            profile.raw_damage += pet.weighted_damage();

            profile.bleed |= pet.passive_mentions("bleed");
            profile.aoe_ability |=
                pet.cooldown_mentions("barrage") || pet.cooldown_mentions("breath");
            profile.poison_or_disease |=
                pet.ability_mentions("poison") || pet.ability_mentions("disease");
            profile.chill |= pet.ability_mentions("chill");
        }

        profile
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Bleed from passive text or an explicit tag
    pub fn has_bleed(&self) -> bool {
        self.bleed || self.has_tag("bleed")
    }

    /// AoE from an explicit tag or a barrage/breath cooldown
    pub fn has_aoe(&self) -> bool {
        self.aoe_ability || self.has_tag("aoe")
    }
}

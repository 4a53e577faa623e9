//! Tank bestiary rules

use crate::catalog::{BestiaryTrait, TraitCategory};
use crate::core::types::{Playstyle, PreferredRange};
use crate::synergy::constants::*;
use crate::synergy::SynergyRules;
use crate::team::TeamProfile;

#[derive(Debug, Clone, Copy, Default)]
pub struct TankRules;

impl SynergyRules for TankRules {
    fn category(&self) -> TraitCategory {
        TraitCategory::Tank
    }

    fn score(&self, entry: &BestiaryTrait, team: &TeamProfile, playstyle: Playstyle) -> u32 {
        let conditions = &entry.conditions;
        let mut score = 0;

        if entry.has_tag("defense_buff") {
            score += TANK_DEFENSE_BUFF;
        }
        if entry.has_tag("debuff_resist") {
            score += TANK_DEBUFF_RESIST;
        }
        if entry.has_tag("party_shield") {
            score += TANK_PARTY_SHIELD;
        }
        if entry.has_tag("damage_redirect") {
            score += TANK_DAMAGE_REDIRECT;
        }

        let min_slots = conditions.min_slots_or(TANK_DEFAULT_MIN_SLOTS);
        if entry.has_tag("big_pet_synergy") && team.tank_slots >= min_slots {
            score += TANK_BIG_PET_SYNERGY;
        }

        let min_followers = conditions.min_followers_or(TANK_DEFAULT_MIN_FOLLOWERS);
        if team.followers >= min_followers as usize {
            score += TANK_TEAM_SIZE_FLOOR;
        }

        if conditions.prefers(PreferredRange::Melee) {
            score += if playstyle == Playstyle::AoeFar {
                TANK_MELEE_AOE_FAR
            } else {
                TANK_MELEE_CLOSE
            };
        }

        score
    }
}

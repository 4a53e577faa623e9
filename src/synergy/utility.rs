//! Utility bestiary rules

use crate::catalog::{BestiaryTrait, TraitCategory};
use crate::core::types::{Playstyle, PreferredRange};
use crate::synergy::constants::*;
use crate::synergy::SynergyRules;
use crate::team::TeamProfile;

#[derive(Debug, Clone, Copy, Default)]
pub struct UtilityRules;

impl SynergyRules for UtilityRules {
    fn category(&self) -> TraitCategory {
        TraitCategory::Utility
    }

    fn score(&self, entry: &BestiaryTrait, team: &TeamProfile, playstyle: Playstyle) -> u32 {
        let conditions = &entry.conditions;
        let mut score = 0;

        if entry.has_tag("damage_buff") {
            score += UTILITY_DAMAGE_BUFF;
        }
        if entry.has_tag("tamer_damage_buff") {
            score += UTILITY_TAMER_DAMAGE_BUFF;
        }
        if entry.has_tag("lifesteal") {
            score += UTILITY_LIFESTEAL;
        }

        // A condition flag stands in for the team keyword, never for the tag.
        if entry.has_any_tag(&["poison_synergy", "disease_synergy"])
            && (team.poison_or_disease || conditions.requires_poison_or_disease)
        {
            score += UTILITY_POISON_OR_DISEASE;
        }

        if entry.has_tag("chill_synergy") && (team.chill || conditions.requires_chill) {
            score += UTILITY_CHILL;
        }

        let min_followers = conditions.min_followers_or(UTILITY_DEFAULT_MIN_FOLLOWERS);
        if team.followers >= min_followers as usize {
            score += UTILITY_TEAM_SIZE_FLOOR;
        }

        let aoe_far = playstyle == Playstyle::AoeFar;
        if conditions.prefers(PreferredRange::Melee) && !aoe_far {
            score += UTILITY_MELEE_CLOSE;
        }
        if conditions.prefers(PreferredRange::Ranged) && aoe_far {
            score += UTILITY_RANGED_AOE_FAR;
        }

        score
    }
}

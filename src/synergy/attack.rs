//! Attack bestiary rules

use crate::catalog::{BestiaryTrait, TraitCategory};
use crate::core::types::{Playstyle, PreferredRange};
use crate::synergy::constants::*;
use crate::synergy::SynergyRules;
use crate::team::TeamProfile;

#[derive(Debug, Clone, Copy, Default)]
pub struct AttackRules;

impl SynergyRules for AttackRules {
    fn category(&self) -> TraitCategory {
        TraitCategory::Attack
    }

    fn score(&self, entry: &BestiaryTrait, team: &TeamProfile, playstyle: Playstyle) -> u32 {
        let conditions = &entry.conditions;
        let mut score = 0;

        if entry.has_tag("damage_buff") {
            score += ATTACK_DAMAGE_BUFF;
        }
        if entry.has_tag("healing_buff") {
            score += ATTACK_HEALING_BUFF;
        }

        if entry.has_tag("bleed_synergy") && team.has_bleed() {
            score += ATTACK_BLEED_SYNERGY;
        }
        let min_followers = conditions.min_followers_or(ATTACK_DEFAULT_MIN_FOLLOWERS);
        if entry.has_tag("follower_count_scaling") && team.followers >= min_followers as usize {
            score += ATTACK_FOLLOWER_SCALING;
        }

        match playstyle {
            Playstyle::AoeFar => {
                if entry.has_tag("ranged_friendly") {
                    score += ATTACK_RANGED_FRIENDLY;
                }
                if team.has_aoe() {
                    score += ATTACK_TEAM_AOE;
                }
            }
            Playstyle::SingleTarget => {
                if entry.has_any_tag(&["crit_synergy", "single_target_synergy"]) {
                    score += ATTACK_CRIT_OR_SINGLE_TARGET;
                }
            }
            Playstyle::Balanced => {
                if entry.has_tag("tank_synergy") && team.has_tag("tank") {
                    score += ATTACK_TANK_SYNERGY;
                }
            }
        }

        let aoe_far = playstyle == Playstyle::AoeFar;
        if conditions.prefers(PreferredRange::Ranged) && aoe_far {
            score += ATTACK_RANGED_AOE_FAR;
        }
        if conditions.prefers(PreferredRange::Melee) && !aoe_far {
            score += ATTACK_MELEE_CLOSE;
        }

        score
    }
}

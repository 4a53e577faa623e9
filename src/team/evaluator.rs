//! Team composition score for a playstyle

use crate::catalog::Pet;
use crate::core::config::EngineConfig;
use crate::core::types::{round_half_up, Playstyle};
use crate::team::constants::*;
use crate::team::profile::TeamProfile;

/// Score a team with the default limits
pub fn score_team(team: &[&Pet], playstyle: Playstyle) -> i64 {
    score_team_with_config(team, playstyle, &EngineConfig::default())
}

/// Score a team
///
/// Over-capacity teams are penalized, never rejected. An empty team
/// scores 0.
pub fn score_team_with_config(team: &[&Pet], playstyle: Playstyle, config: &EngineConfig) -> i64 {
    let profile = TeamProfile::from_pets(team);
    round_half_up(profile_score(&profile, playstyle, config))
}

fn profile_score(profile: &TeamProfile, playstyle: Playstyle, config: &EngineConfig) -> f64 {
    let mut score = profile.raw_damage;

    if profile.slots > config.slot_capacity {
        score -= config.over_capacity_penalty;
    }

    match playstyle {
        Playstyle::AoeFar => {
            if profile.has_tag("aoe") {
                score += AOE_TAG_BONUS;
            }
            if profile.has_tag("ranged_friendly") || profile.has_tag("spell") {
                score += AOE_RANGED_OR_SPELL_BONUS;
            }
        }
        Playstyle::SingleTarget => {
            if profile.has_tag("single_target") || profile.has_tag("bleed") {
                score += SINGLE_TARGET_BONUS;
            }
        }
        Playstyle::Balanced => {
            if profile.has_tag("tank") && profile.has_tag("attack") {
                score += BALANCED_TANK_AND_ATTACK_BONUS;
            }
        }
    }

    score
}

//! Suggest pets that fill a team's remaining slots
//!
//! Candidates are ranked by how well they cover missing roles and the
//! playstyle, then packed greedily: a candidate that does not fit the
//! remaining slots is skipped and the walk continues. Larger combinations
//! that would pack better are never searched.

use ahash::AHashSet;

use crate::catalog::{Catalog, Pet};
use crate::core::config::EngineConfig;
use crate::core::types::{round_half_up, PetClass, Playstyle, ScoredCandidate};
use crate::team::constants::*;
use crate::team::profile::TeamProfile;

/// Recommend additions with the default limits
pub fn recommend_team<'a>(
    catalog: &'a Catalog,
    team: &[&Pet],
    playstyle: Playstyle,
) -> Vec<ScoredCandidate<'a, Pet>> {
    recommend_team_with_config(catalog, team, playstyle, &EngineConfig::default())
}

/// Recommend additions, best first
///
/// Returns an empty list when the team has no free slots.
pub fn recommend_team_with_config<'a>(
    catalog: &'a Catalog,
    team: &[&Pet],
    playstyle: Playstyle,
    config: &EngineConfig,
) -> Vec<ScoredCandidate<'a, Pet>> {
    let profile = TeamProfile::from_pets(team);
    if profile.slots >= config.slot_capacity {
        return Vec::new();
    }

    let remaining = config.slot_capacity - profile.slots;
    let ranked = rank_candidates(catalog, team, &profile, playstyle, remaining);
    let open_seats = config.max_team_size.saturating_sub(team.len());

    fill_remaining(ranked, remaining, open_seats)
}

/// Score every uncommitted pet that fits `remaining` slots, best first
///
/// Ties keep catalog order.
pub fn rank_candidates<'a>(
    catalog: &'a Catalog,
    team: &[&Pet],
    profile: &TeamProfile,
    playstyle: Playstyle,
    remaining: u32,
) -> Vec<ScoredCandidate<'a, Pet>> {
    let on_team: AHashSet<&str> = team.iter().map(|p| p.id.as_str()).collect();

    let mut ranked: Vec<ScoredCandidate<'a, Pet>> = catalog
        .pets()
        .iter()
        .filter(|pet| !on_team.contains(pet.id.as_str()) && pet.slots <= remaining)
        .map(|pet| ScoredCandidate {
            subject: pet,
            score: candidate_score(pet, profile, playstyle),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Walk the ranking, taking every candidate that still fits
fn fill_remaining<'a>(
    ranked: Vec<ScoredCandidate<'a, Pet>>,
    mut slot_budget: u32,
    mut open_seats: usize,
) -> Vec<ScoredCandidate<'a, Pet>> {
    let mut picks = Vec::new();

    for candidate in ranked {
        if slot_budget == 0 || open_seats == 0 {
            break;
        }
        if candidate.subject.slots > slot_budget {
            continue;
        }
        slot_budget -= candidate.subject.slots;
        open_seats -= 1;
        picks.push(candidate);
    }

    picks
}

/// How much a pet would add to the current team
pub fn candidate_score(pet: &Pet, profile: &TeamProfile, playstyle: Playstyle) -> i64 {
    let mut score = 0.0;

    match pet.class {
        PetClass::Tank if !profile.has_tag("tank") => score += MISSING_TANK_BONUS,
        PetClass::Attack if !profile.has_tag("attack") => score += MISSING_ATTACK_BONUS,
        _ => {}
    }

    match playstyle {
        Playstyle::AoeFar => {
            if pet.has_tag("aoe") {
                score += CANDIDATE_AOE_BONUS;
            }
            if pet.has_tag("ranged_friendly") || pet.has_tag("spell") {
                score += CANDIDATE_RANGED_OR_SPELL_BONUS;
            }
        }
        Playstyle::SingleTarget => {
            if pet.has_tag("single_target") || pet.has_tag("bleed") {
                score += CANDIDATE_SINGLE_TARGET_BONUS;
            }
        }
        Playstyle::Balanced => {
            let fills_tank = pet.has_tag("tank") && !profile.has_tag("tank");
            let fills_attack = pet.has_tag("attack") && !profile.has_tag("attack");
            if fills_tank || fills_attack {
                score += CANDIDATE_BALANCED_ROLE_BONUS;
            }
        }
    }

    score += pet.avg_damage() * pet.scalar() * CANDIDATE_DAMAGE_WEIGHT;

    round_half_up(score)
}

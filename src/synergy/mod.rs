//! Bestiary trait synergy scoring
//!
//! Each category has its own rule set. A trait's score is a sum of
//! independent bonuses gated on the trait's tags and conditions, the team's
//! aggregate profile and the playstyle. Rules never subtract.

pub mod attack;
pub mod constants;
pub mod tank;
pub mod utility;

pub use attack::AttackRules;
pub use tank::TankRules;
pub use utility::UtilityRules;

use crate::allocation::rank::{recommend_rank, Tier};
use crate::catalog::{BestiaryTrait, Catalog, Pet, TraitCategory};
use crate::core::types::Playstyle;
use crate::team::TeamProfile;
use serde::Serialize;

/// Scoring rules for one bestiary category
pub trait SynergyRules {
    fn category(&self) -> TraitCategory;

    /// Synergy of `entry` with the team under `playstyle`
    fn score(&self, entry: &BestiaryTrait, team: &TeamProfile, playstyle: Playstyle) -> u32;
}

/// Rule set for a category
pub fn rules_for(category: TraitCategory) -> &'static dyn SynergyRules {
    match category {
        TraitCategory::Attack => &AttackRules,
        TraitCategory::Tank => &TankRules,
        TraitCategory::Utility => &UtilityRules,
    }
}

/// A bestiary trait with its raw synergy score and rank
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredTrait<'a> {
    #[serde(rename = "trait")]
    pub entry: &'a BestiaryTrait,
    pub score: u32,
    pub tier: Tier,
}

impl<'a> ScoredTrait<'a> {
    pub fn new(entry: &'a BestiaryTrait, score: u32) -> Self {
        Self {
            entry,
            score,
            tier: recommend_rank(score),
        }
    }
}

/// Score every trait of a category against a team, best first
///
/// Ties keep the input order.
pub fn recommend_bestiary<'a>(
    category: TraitCategory,
    traits: &'a [BestiaryTrait],
    team: &[&Pet],
    playstyle: Playstyle,
) -> Vec<ScoredTrait<'a>> {
    let profile = TeamProfile::from_pets(team);
    score_with_profile(rules_for(category), traits, &profile, playstyle)
}

/// Score a catalog's traits of one category
pub fn score_category<'a>(
    catalog: &'a Catalog,
    category: TraitCategory,
    team: &[&Pet],
    playstyle: Playstyle,
) -> Vec<ScoredTrait<'a>> {
    recommend_bestiary(category, catalog.traits(category), team, playstyle)
}

/// Score traits with an already-built profile
pub fn score_with_profile<'a>(
    rules: &dyn SynergyRules,
    traits: &'a [BestiaryTrait],
    profile: &TeamProfile,
    playstyle: Playstyle,
) -> Vec<ScoredTrait<'a>> {
    let mut scored: Vec<ScoredTrait<'a>> = traits
        .iter()
        .map(|entry| ScoredTrait::new(entry, rules.score(entry, profile, playstyle)))
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

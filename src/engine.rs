//! Engine facade for front ends
//!
//! Owns the catalog and the limits; every call recomputes from scratch.
//! Front ends render what comes back and never re-implement a rule.

use serde::Serialize;

use crate::allocation::{allocated_points, build_budget_allocation, AllocationEntry};
use crate::catalog::{Catalog, Pet, TraitCategory};
use crate::core::config::EngineConfig;
use crate::core::types::{Playstyle, ScoredCandidate};
use crate::synergy::{rules_for, score_category, score_with_profile, ScoredTrait};
use crate::team::{recommend_team_with_config, score_team_with_config, TeamProfile, TeamSelection};

/// Shown instead of a report when nothing is selected
pub const NO_TEAM_MESSAGE: &str = "Select at least one pet.";

/// Team fitness for a playstyle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamEvaluation {
    pub score: i64,
}

/// Ranked traits and their point allocation for one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport<'a> {
    pub category: TraitCategory,
    pub ranked: Vec<ScoredTrait<'a>>,
    pub allocation: Vec<AllocationEntry>,
    pub allocated_points: u32,
}

/// Everything a front end needs for one team and playstyle
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport<'a> {
    pub playstyle: Playstyle,
    pub members: Vec<&'a Pet>,
    pub team_score: i64,
    pub additions: Vec<ScoredCandidate<'a, Pet>>,
    pub categories: Vec<CategoryReport<'a>>,
}

impl<'a> TeamReport<'a> {
    /// Member names joined for display
    pub fn member_names(&self) -> String {
        self.members
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn category(&self, category: TraitCategory) -> Option<&CategoryReport<'a>> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Outcome of a full recommendation run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Recommendation<'a> {
    NoTeamSelected,
    Ready(TeamReport<'a>),
}

/// Scoring engine bound to one catalog
#[derive(Debug, Clone, Default)]
pub struct SynergyEngine {
    catalog: Catalog,
    config: EngineConfig,
}

impl SynergyEngine {
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(catalog, EngineConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluate_team(&self, team: &[&Pet], playstyle: Playstyle) -> TeamEvaluation {
        TeamEvaluation {
            score: score_team_with_config(team, playstyle, &self.config),
        }
    }

    /// Suggested additions; nothing for an empty team
    pub fn recommend_additions(
        &self,
        team: &[&Pet],
        playstyle: Playstyle,
    ) -> Vec<ScoredCandidate<'_, Pet>> {
        if team.is_empty() {
            return Vec::new();
        }
        recommend_team_with_config(&self.catalog, team, playstyle, &self.config)
    }

    /// Ranked traits of one category; nothing for an empty team
    pub fn score_traits(
        &self,
        category: TraitCategory,
        team: &[&Pet],
        playstyle: Playstyle,
    ) -> Vec<ScoredTrait<'_>> {
        if team.is_empty() {
            return Vec::new();
        }
        score_category(&self.catalog, category, team, playstyle)
    }

    pub fn allocate_budget(&self, scored: &[ScoredTrait<'_>], budget: u32) -> Vec<AllocationEntry> {
        build_budget_allocation(scored, budget)
    }

    /// Run every recommendation for a selection
    pub fn recommend(&self, selection: &TeamSelection, playstyle: Playstyle) -> Recommendation<'_> {
        let members = selection.resolve(&self.catalog);
        if members.is_empty() {
            tracing::debug!("No pets selected, skipping recommendations");
            return Recommendation::NoTeamSelected;
        }

        let profile = TeamProfile::from_pets(&members);
        let team_score = self.evaluate_team(&members, playstyle).score;
        let additions = self.recommend_additions(&members, playstyle);

        let categories: Vec<CategoryReport<'_>> = TraitCategory::ALL
            .iter()
            .map(|&category| {
                let ranked = self.score_traits_for_profile(category, &profile, playstyle);
                let allocation = build_budget_allocation(&ranked, self.config.allocation_budget);
                CategoryReport {
                    category,
                    allocated_points: allocated_points(&allocation),
                    ranked,
                    allocation,
                }
            })
            .collect();

        tracing::debug!(
            "Recommended for {} pets ({}): score {}, {} additions",
            members.len(),
            playstyle,
            team_score,
            additions.len()
        );

        Recommendation::Ready(TeamReport {
            playstyle,
            members,
            team_score,
            additions,
            categories,
        })
    }

    fn score_traits_for_profile(
        &self,
        category: TraitCategory,
        profile: &TeamProfile,
        playstyle: Playstyle,
    ) -> Vec<ScoredTrait<'_>> {
        score_with_profile(
            rules_for(category),
            self.catalog.traits(category),
            profile,
            playstyle,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BestiaryTrait;
    use crate::core::types::PetClass;

    fn engine() -> SynergyEngine {
        let catalog = Catalog::with_pets(vec![
            Pet::new("bear", "Bear", PetClass::Tank)
                .with_slots(2)
                .with_tags(["tank"])
                .with_damage(4.0, 8.0),
            Pet::new("lynx", "Lynx", PetClass::Attack)
                .with_slots(1)
                .with_tags(["attack"])
                .with_damage(10.0, 12.0)
                .with_abilities("Claws cause bleed", ""),
        ])
        .with_traits(
            TraitCategory::Attack,
            vec![BestiaryTrait::new("Blood Frenzy").with_tags(["damage_buff", "bleed_synergy"])],
        );
        SynergyEngine::with_catalog(catalog)
    }

    #[test]
    fn test_empty_selection_short_circuits() {
        let engine = engine();
        let result = engine.recommend(&TeamSelection::new(), Playstyle::Balanced);
        assert!(matches!(result, Recommendation::NoTeamSelected));

        let ghosts = TeamSelection::from_ids(["ghost"]);
        assert!(matches!(
            engine.recommend(&ghosts, Playstyle::Balanced),
            Recommendation::NoTeamSelected
        ));
    }

    #[test]
    fn test_full_report() {
        let engine = engine();
        let selection = TeamSelection::from_ids(["bear", "lynx"]);

        let Recommendation::Ready(report) = engine.recommend(&selection, Playstyle::Balanced) else {
            panic!("expected a report");
        };
        assert_eq!(report.member_names(), "Bear, Lynx");
        assert_eq!(report.team_score, 6 + 11 + 30);
        assert!(report.additions.is_empty());
        assert_eq!(report.categories.len(), 3);

        let attack = report.category(TraitCategory::Attack).unwrap();
        assert_eq!(attack.ranked[0].score, 35);
        assert_eq!(attack.allocation[0].points, 6);
        assert_eq!(attack.allocated_points, 6);
        assert!(report.category(TraitCategory::Tank).unwrap().ranked.is_empty());
    }

    #[test]
    fn test_surface_matches_free_functions() {
        let engine = engine();
        let bear = engine.catalog().pet("bear").unwrap();
        assert_eq!(engine.evaluate_team(&[bear], Playstyle::Balanced).score, 6);

        let additions = engine.recommend_additions(&[bear], Playstyle::Balanced);
        assert_eq!(additions.len(), 1);
        assert_eq!(additions[0].subject.id, "lynx");

        let scored = engine.score_traits(TraitCategory::Attack, &[bear], Playstyle::Balanced);
        assert_eq!(scored[0].score, 10);
        let allocation = engine.allocate_budget(&scored, 20);
        assert_eq!(allocation[0].points, 1);
    }

    #[test]
    fn test_empty_team_gets_no_suggestions() {
        let engine = engine();
        assert!(engine.recommend_additions(&[], Playstyle::Balanced).is_empty());
        for category in TraitCategory::ALL {
            assert!(engine.score_traits(category, &[], Playstyle::Balanced).is_empty());
        }
        assert_eq!(engine.evaluate_team(&[], Playstyle::Balanced).score, 0);
    }

    #[test]
    fn test_report_serializes() {
        let engine = engine();
        let selection = TeamSelection::from_ids(["lynx"]);
        let json = serde_json::to_value(engine.recommend(&selection, Playstyle::SingleTarget)).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["playstyle"], "single_target");
        assert_eq!(json["categories"][0]["ranked"][0]["trait"]["name"], "Blood Frenzy");
        assert_eq!(json["categories"][0]["ranked"][0]["tier"], 6);

        let empty = serde_json::to_value(engine.recommend(&TeamSelection::new(), Playstyle::Balanced))
            .unwrap();
        assert_eq!(empty["status"], "no_team_selected");
    }
}

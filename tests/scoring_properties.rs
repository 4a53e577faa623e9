//! Property tests for the scoring and allocation rules

use pet_synergy::allocation::{allocated_points, build_budget_allocation, recommend_rank};
use pet_synergy::catalog::{BestiaryTrait, Catalog, Pet, TraitCategory};
use pet_synergy::core::{PetClass, Playstyle};
use pet_synergy::synergy::{recommend_bestiary, ScoredTrait};
use pet_synergy::team::{recommend_team, score_team};
use proptest::prelude::*;

const PET_TAGS: [&str; 7] = ["aoe", "tank", "attack", "bleed", "spell", "single_target", "ranged_friendly"];

fn arb_playstyle() -> impl Strategy<Value = Playstyle> {
    prop_oneof![
        Just(Playstyle::AoeFar),
        Just(Playstyle::SingleTarget),
        Just(Playstyle::Balanced),
    ]
}

fn arb_pet() -> impl Strategy<Value = Pet> {
    (
        0u32..4,
        proptest::sample::subsequence(PET_TAGS.to_vec(), 0..=PET_TAGS.len()),
        0u32..30,
        0u32..30,
        1u32..5,
        0usize..3,
        any::<bool>(),
    )
        .prop_map(|(slots, tags, lo, hi, half_scalar, class, bleeds)| {
            let class = match class {
                0 => PetClass::Tank,
                1 => PetClass::Attack,
                _ => PetClass::Utility,
            };
            let passive = if bleeds { "Causes bleed" } else { "" };
            Pet::new("pet", "Pet", class)
                .with_slots(slots)
                .with_tags(tags)
                .with_damage(lo as f64, (lo + hi) as f64)
                .with_underdog_scalar(half_scalar as f64 * 0.5)
                .with_abilities(passive, "Breath of fire")
        })
}

fn arb_pets(max: usize) -> impl Strategy<Value = Vec<Pet>> {
    prop::collection::vec(arb_pet(), 0..max).prop_map(|pets| {
        pets.into_iter()
            .enumerate()
            .map(|(i, mut pet)| {
                pet.id = format!("pet{}", i);
                pet
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn team_score_ignores_member_order(
        (team, shuffled) in arb_pets(6).prop_flat_map(|pets| (Just(pets.clone()), Just(pets).prop_shuffle())),
        playstyle in arb_playstyle(),
    ) {
        let a: Vec<&Pet> = team.iter().collect();
        let b: Vec<&Pet> = shuffled.iter().collect();
        prop_assert_eq!(score_team(&a, playstyle), score_team(&b, playstyle));
        prop_assert_eq!(score_team(&a, playstyle), score_team(&a, playstyle));
    }

    #[test]
    fn rank_is_non_decreasing(a in 0u32..200, b in 0u32..200) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(recommend_rank(lo).points() <= recommend_rank(hi).points());
    }

    #[test]
    fn allocation_respects_budget_and_order(
        scores in prop::collection::vec(0u32..60, 0..12),
        budget in 0u32..40,
    ) {
        let traits: Vec<BestiaryTrait> = (0..scores.len())
            .map(|i| BestiaryTrait::new(format!("t{}", i)))
            .collect();
        let scored: Vec<ScoredTrait<'_>> = traits
            .iter()
            .zip(&scores)
            .map(|(entry, &score)| ScoredTrait::new(entry, score))
            .collect();

        let allocation = build_budget_allocation(&scored, budget);
        prop_assert!(allocated_points(&allocation) <= budget);

        let mut expected = scored.clone();
        expected.sort_by(|x, y| y.score.cmp(&x.score));
        for (entry, want) in allocation.iter().zip(&expected) {
            prop_assert_eq!(&entry.name, &want.entry.name);
            prop_assert!(entry.points >= 1 && entry.points <= want.tier.points());
        }
    }

    #[test]
    fn advisor_respects_capacity_and_membership(
        pets in arb_pets(12),
        team_size in 0usize..4,
        playstyle in arb_playstyle(),
    ) {
        let catalog = Catalog::with_pets(pets);
        let team: Vec<&Pet> = catalog.pets().iter().take(team_size).collect();
        let used: u32 = team.iter().map(|p| p.slots).sum();

        let picks = recommend_team(&catalog, &team, playstyle);
        if used >= 5 {
            prop_assert!(picks.is_empty());
        } else {
            let remaining = 5 - used;
            let added: u32 = picks.iter().map(|c| c.subject.slots).sum();
            prop_assert!(added <= remaining);
            prop_assert!(team.len() + picks.len() <= 5);
            for pick in &picks {
                prop_assert!(pick.subject.slots <= remaining);
                prop_assert!(team.iter().all(|p| p.id != pick.subject.id));
            }
            for pair in picks.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }

    #[test]
    fn trait_scores_sorted_descending(
        pets in arb_pets(5),
        playstyle in arb_playstyle(),
    ) {
        let traits = vec![
            BestiaryTrait::new("a").with_tags(["damage_buff", "bleed_synergy"]),
            BestiaryTrait::new("b").with_tags(["ranged_friendly", "crit_synergy"]),
            BestiaryTrait::new("c").with_tags(["follower_count_scaling", "tank_synergy"]),
            BestiaryTrait::new("d").with_tags(["defense_buff", "big_pet_synergy"]),
        ];
        let team: Vec<&Pet> = pets.iter().collect();
        for category in TraitCategory::ALL {
            let scored = recommend_bestiary(category, &traits, &team, playstyle);
            prop_assert_eq!(scored.len(), traits.len());
            for pair in scored.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}

#[test]
fn empty_team_scores_zero_for_every_playstyle() {
    for playstyle in [Playstyle::AoeFar, Playstyle::SingleTarget, Playstyle::Balanced] {
        assert_eq!(score_team(&[], playstyle), 0);
    }
}

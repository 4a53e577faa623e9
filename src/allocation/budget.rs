//! Spend a fixed point budget on the best-ranked traits
//!
//! The walk fills and clips: the last trait that still has room is cut down
//! to whatever budget remains instead of being skipped.

use crate::allocation::rank::recommend_rank;
use crate::catalog::BestiaryTrait;
use crate::synergy::ScoredTrait;
use serde::Serialize;

pub const DEFAULT_BUDGET: u32 = 20;

/// Points assigned to one trait
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationEntry {
    pub name: String,
    pub description: String,
    pub points: u32,
}

impl AllocationEntry {
    fn from_trait(entry: &BestiaryTrait, points: u32) -> Self {
        Self {
            name: entry.name.clone(),
            description: entry.description.clone(),
            points,
        }
    }
}

/// Allocate `budget` points across `scored`, highest raw score first
pub fn build_budget_allocation(scored: &[ScoredTrait<'_>], budget: u32) -> Vec<AllocationEntry> {
    let mut ranked: Vec<&ScoredTrait<'_>> = scored.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let mut allocation = Vec::new();
    let mut total = 0u32;

    for candidate in ranked {
        if total >= budget {
            break;
        }
        let points = recommend_rank(candidate.score).points().min(budget - total);
        if points == 0 {
            continue;
        }
        allocation.push(AllocationEntry::from_trait(candidate.entry, points));
        total += points;
    }

    allocation
}

/// Total points spent by an allocation
pub fn allocated_points(allocation: &[AllocationEntry]) -> u32 {
    allocation.iter().map(|e| e.points).sum()
}

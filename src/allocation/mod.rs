//! Bestiary rank tiers and point budget allocation

pub mod budget;
pub mod rank;

pub use budget::{allocated_points, build_budget_allocation, AllocationEntry, DEFAULT_BUDGET};
pub use rank::{recommend_rank, Tier};

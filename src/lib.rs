//! Pet Synergy - team scoring and bestiary recommendations for pet teams

pub mod allocation;
pub mod catalog;
pub mod core;
pub mod engine;
pub mod synergy;
pub mod team;

pub use engine::{Recommendation, SynergyEngine, TeamEvaluation, TeamReport};

//! Quantize a synergy score into a bestiary rank

use serde::{Deserialize, Serialize};

/// Minimum score for the top rank
pub const HIGH_RANK_THRESHOLD: u32 = 30;
/// Minimum score for the middle rank
pub const MID_RANK_THRESHOLD: u32 = 15;

/// Point value a trait is worth at its recommended rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub fn points(&self) -> u32 {
        match self {
            Tier::Low => 1,
            Tier::Mid => 3,
            Tier::High => 6,
        }
    }
}

impl From<Tier> for u32 {
    fn from(tier: Tier) -> Self {
        tier.points()
    }
}

impl TryFrom<u32> for Tier {
    type Error = String;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        match points {
            1 => Ok(Tier::Low),
            3 => Ok(Tier::Mid),
            6 => Ok(Tier::High),
            other => Err(format!("{} is not a rank point value", other)),
        }
    }
}

/// Rank for a raw synergy score: >= 30 -> 6, >= 15 -> 3, else 1
pub fn recommend_rank(score: u32) -> Tier {
    if score >= HIGH_RANK_THRESHOLD {
        Tier::High
    } else if score >= MID_RANK_THRESHOLD {
        Tier::Mid
    } else {
        Tier::Low
    }
}

//! Core type definitions shared by the catalog and the scoring rules

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form synergy labels carried by pets and bestiary traits
pub type TagSet = AHashSet<String>;

/// Strategy selector that decides which tag bonuses apply
///
/// Parsing never fails: anything other than `aoe_far` or `single_target`
/// falls into the `Balanced` branch of every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Playstyle {
    AoeFar,
    SingleTarget,
    #[default]
    Balanced,
}

impl Playstyle {
    pub fn parse(value: &str) -> Self {
        match value {
            "aoe_far" => Playstyle::AoeFar,
            "single_target" => Playstyle::SingleTarget,
            _ => Playstyle::Balanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Playstyle::AoeFar => "aoe_far",
            Playstyle::SingleTarget => "single_target",
            Playstyle::Balanced => "balanced",
        }
    }
}

impl From<&str> for Playstyle {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Playstyle {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Playstyle> for String {
    fn from(value: Playstyle) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Playstyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combat role of a pet; unrecognised values are kept as-is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PetClass {
    Tank,
    Attack,
    Utility,
    Other(String),
    #[default]
    Unknown,
}

impl From<String> for PetClass {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Tank" => PetClass::Tank,
            "Attack" => PetClass::Attack,
            "Utility" => PetClass::Utility,
            "" => PetClass::Unknown,
            _ => PetClass::Other(value),
        }
    }
}

impl From<PetClass> for String {
    fn from(value: PetClass) -> Self {
        match value {
            PetClass::Tank => "Tank".to_string(),
            PetClass::Attack => "Attack".to_string(),
            PetClass::Utility => "Utility".to_string(),
            PetClass::Other(s) => s,
            PetClass::Unknown => String::new(),
        }
    }
}

/// Preferred engagement range declared in a trait's conditions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PreferredRange {
    Melee,
    Ranged,
    /// Any other value; matches no range rule
    Other(String),
}

impl From<String> for PreferredRange {
    fn from(value: String) -> Self {
        match value.as_str() {
            "melee" => PreferredRange::Melee,
            "ranged" => PreferredRange::Ranged,
            _ => PreferredRange::Other(value),
        }
    }
}

impl From<PreferredRange> for String {
    fn from(value: PreferredRange) -> Self {
        match value {
            PreferredRange::Melee => "melee".to_string(),
            PreferredRange::Ranged => "ranged".to_string(),
            PreferredRange::Other(s) => s,
        }
    }
}

/// A catalog entry paired with its score for one recommendation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCandidate<'a, T> {
    pub subject: &'a T,
    pub score: i64,
}

/// Round to the nearest integer, halves toward positive infinity
///
/// `f64::round` sends -2.5 to -3; scores need -2.5 -> -2.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

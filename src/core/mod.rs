pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{Result, SynergyError};
pub use types::{round_half_up, PetClass, Playstyle, PreferredRange, ScoredCandidate, TagSet};

//! Engine configuration with documented limits
//!
//! Rule bonuses live in `synergy::constants`; this struct only holds the
//! capacity and budget limits that frame a recommendation run.

use crate::core::error::{Result, SynergyError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Limits used by the team advisor, the evaluator and the allocator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === TEAM LIMITS ===
    /// Total slot capacity of a team
    ///
    /// Teams above this are still scored, but take `over_capacity_penalty`.
    pub slot_capacity: u32,

    /// Maximum number of pets on a team
    pub max_team_size: usize,

    /// Points subtracted from the team score when slots exceed capacity
    pub over_capacity_penalty: f64,

    // === ALLOCATION ===
    /// Bestiary points available per category
    pub allocation_budget: u32,

    /// How many ranked traits per category a front end should show
    pub suggestion_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            slot_capacity: 5,
            max_team_size: 5,
            over_capacity_penalty: 50.0,
            allocation_budget: 20,
            suggestion_limit: 5,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate().map_err(SynergyError::InvalidConfig)?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_team_size == 0 {
            return Err("max_team_size must be at least 1".into());
        }

        if self.over_capacity_penalty < 0.0 {
            return Err(format!(
                "over_capacity_penalty ({}) must not be negative",
                self.over_capacity_penalty
            ));
        }

        if self.suggestion_limit == 0 {
            return Err("suggestion_limit must be at least 1".into());
        }

        Ok(())
    }
}

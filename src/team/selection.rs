//! The player's chosen pets
//!
//! A selection stores ids in pick order. Edits enforce the team limits;
//! scoring works on the resolved pets and tolerates anything.

use crate::catalog::{Catalog, Pet};
use crate::core::config::EngineConfig;
use crate::core::error::{Result, SynergyError};
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of pet ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSelection {
    pet_ids: Vec<String>,
}

impl TeamSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from stored ids without checking limits
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pet_ids: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !pet_ids.contains(&id) {
                pet_ids.push(id);
            }
        }
        Self { pet_ids }
    }

    /// Add a pet, refusing unknown ids, duplicates, a full roster or a
    /// pet that would exceed the slot capacity
    pub fn add(&mut self, id: &str, catalog: &Catalog, config: &EngineConfig) -> Result<()> {
        let pet = catalog
            .pet(id)
            .ok_or_else(|| SynergyError::UnknownPet(id.to_string()))?;

        if self.contains(id) {
            return Err(SynergyError::DuplicatePet(id.to_string()));
        }

        if self.pet_ids.len() >= config.max_team_size {
            return Err(SynergyError::TeamFull {
                max: config.max_team_size,
            });
        }

        let used = self.used_slots(catalog);
        let available = config.slot_capacity.saturating_sub(used);
        if pet.slots > available {
            return Err(SynergyError::SlotCapacityExceeded {
                requested: pet.slots,
                available,
            });
        }

        self.pet_ids.push(id.to_string());
        Ok(())
    }

    /// Remove a pet; returns whether it was selected
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.pet_ids.len();
        self.pet_ids.retain(|p| p != id);
        self.pet_ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pet_ids.iter().any(|p| p == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.pet_ids
    }

    pub fn len(&self) -> usize {
        self.pet_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pet_ids.is_empty()
    }

    /// Resolve ids against the catalog, dropping unknown ones
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Pet> {
        self.pet_ids
            .iter()
            .filter_map(|id| {
                let pet = catalog.pet(id);
                if pet.is_none() {
                    tracing::warn!("Selected pet '{}' is not in the catalog, skipping", id);
                }
                pet
            })
            .collect()
    }

    /// Slots used by the resolvable members
    pub fn used_slots(&self, catalog: &Catalog) -> u32 {
        self.pet_ids
            .iter()
            .filter_map(|id| catalog.pet(id))
            .fold(0u32, |used, p| used.saturating_add(p.slots))
    }
}

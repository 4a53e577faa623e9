//! Read-only catalog of pets and bestiary traits
//!
//! Built once at startup and shared by reference with every scoring call.

pub mod bestiary;
pub mod pet;
mod loader;

pub use bestiary::{BestiaryTrait, TraitCategory, TraitConditions};
pub use loader::{load_catalog, parse_pets, parse_traits};
pub use pet::Pet;

use ahash::AHashMap;
use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// All pets plus one trait collection per bestiary category
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pets: Vec<Pet>,
    by_id: AHashMap<String, usize>,
    attack: Vec<BestiaryTrait>,
    tank: Vec<BestiaryTrait>,
    utility: Vec<BestiaryTrait>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from pets; trait collections start empty
    pub fn with_pets(pets: Vec<Pet>) -> Self {
        let mut by_id = AHashMap::with_capacity(pets.len());
        for (idx, pet) in pets.iter().enumerate() {
            // First record wins on duplicate ids
            by_id.entry(pet.id.clone()).or_insert(idx);
        }

        Self {
            pets,
            by_id,
            ..Default::default()
        }
    }

    /// Replace the trait collection for a category
    pub fn with_traits(mut self, category: TraitCategory, traits: Vec<BestiaryTrait>) -> Self {
        match category {
            TraitCategory::Attack => self.attack = traits,
            TraitCategory::Tank => self.tank = traits,
            TraitCategory::Utility => self.utility = traits,
        }
        self
    }

    /// Look up a pet by id
    pub fn pet(&self, id: &str) -> Option<&Pet> {
        self.by_id.get(id).map(|&idx| &self.pets[idx])
    }

    pub fn contains_pet(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All pets in catalog order
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Traits of one category in catalog order
    pub fn traits(&self, category: TraitCategory) -> &[BestiaryTrait] {
        match category {
            TraitCategory::Attack => &self.attack,
            TraitCategory::Tank => &self.tank,
            TraitCategory::Utility => &self.utility,
        }
    }

    pub fn trait_count(&self) -> usize {
        self.attack.len() + self.tank.len() + self.utility.len()
    }
}

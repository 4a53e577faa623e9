//! Load the catalog from JSON files
//!
//! A catalog directory holds `pets.json` plus one file per bestiary
//! category. Bestiary files are optional; a missing one is an empty
//! collection.

use crate::catalog::bestiary::{BestiaryTrait, TraitCategory};
use crate::catalog::pet::Pet;
use crate::catalog::Catalog;
use crate::core::error::Result;
use std::fs;
use std::path::Path;

pub const PETS_FILE: &str = "pets.json";

/// Parse a JSON array of pets
pub fn parse_pets(json: &str) -> Result<Vec<Pet>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of bestiary traits
pub fn parse_traits(json: &str) -> Result<Vec<BestiaryTrait>> {
    Ok(serde_json::from_str(json)?)
}

/// Load every catalog file from `dir`
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let pets_json = fs::read_to_string(dir.join(PETS_FILE))?;
    let mut catalog = Catalog::with_pets(parse_pets(&pets_json)?);

    for category in TraitCategory::ALL {
        let path = dir.join(category.file_name());
        if !path.exists() {
            tracing::warn!("{} missing, {} bestiary is empty", path.display(), category);
            continue;
        }
        let content = fs::read_to_string(&path)?;
        catalog = catalog.with_traits(category, parse_traits(&content)?);
    }

    tracing::debug!(
        "Loaded catalog from {}: {} pets, {} bestiary traits",
        dir.display(),
        catalog.pets().len(),
        catalog.trait_count()
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TraitConditions;
    use crate::core::error::SynergyError;

    #[test]
    fn test_parse_pets_array() {
        let pets = parse_pets(
            r#"[
                { "id": "wolf", "name": "Wolf", "class": "Attack", "slots": 1 },
                { "id": "bear", "name": "Bear", "class": "Tank", "slots": 3, "tags": ["tank"] }
            ]"#,
        )
        .unwrap();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[1].slots, 3);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let pets = parse_pets(
            r#"[{ "id": "ghost", "name": null, "class": null, "slots": null, "tags": null,
                  "minDmg": null, "underdogScalar": null, "passiveAbility": null }]"#,
        )
        .unwrap();
        assert_eq!(pets[0].slots, 0);
        assert!(pets[0].tags.is_empty());
        assert_eq!(pets[0].underdog_scalar, 1.0);
        assert!(pets[0].passive_ability.is_empty());

        let traits = parse_traits(
            r#"[{ "name": "Blank", "description": null, "tags": null, "conditions": null },
                { "name": "Loose", "conditions": { "minSlots": null, "requiresChill": null } }]"#,
        )
        .unwrap();
        assert!(traits[0].tags.is_empty());
        assert_eq!(traits[0].conditions, TraitConditions::default());
        assert_eq!(traits[1].conditions.min_slots, None);
        assert!(!traits[1].conditions.requires_chill);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_traits(r#"{ "name": "Lonely" }"#).unwrap_err();
        assert!(matches!(err, SynergyError::SerdeError(_)));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let err = load_catalog(Path::new("no/such/catalog/dir")).unwrap_err();
        assert!(matches!(err, SynergyError::IoError(_)));
    }

    #[test]
    fn test_load_catalog_from_data_directory() {
        let data_dir = Path::new("data");
        if data_dir.exists() {
            let catalog = load_catalog(data_dir).unwrap();

            assert!(!catalog.pets().is_empty(), "Sample catalog should have pets");
            for category in TraitCategory::ALL {
                assert!(
                    !catalog.traits(category).is_empty(),
                    "{} bestiary should have traits",
                    category
                );
            }
        }
    }
}

use std::collections::HashSet;

use super::data::FoodRecord;
use crate::error::{Error, Result};

/// Catalog shipped inside the binary
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// The Catalog is the read-only, ordered list of recipes.
///
/// It is built once at startup and handed to the application; nothing
/// mutates it afterwards. Tests construct their own catalogs with `new`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<FoodRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(records: Vec<FoodRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateRecordId {
                    id: record.id.clone(),
                });
            }
        }

        Ok(Catalog { records })
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<FoodRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// The catalog compiled into the application
    pub fn bundled() -> Result<Self> {
        let catalog = Self::from_json(BUNDLED_CATALOG)?;
        tracing::info!("Loaded bundled catalog with {} recipes", catalog.len());
        Ok(catalog)
    }

    /// All records in display order
    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::record;
    use crate::state::data::ImageSource;

    #[test]
    fn test_bundled_catalog_is_well_formed() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());

        for item in catalog.records() {
            assert!(!item.name.is_empty(), "{} has no name", item.id);
            assert!(!item.localized_name.is_empty(), "{} has no Urdu name", item.id);
            assert!(!item.ingredients.is_empty(), "{} has no ingredients", item.id);
            assert!(!item.instructions.is_empty(), "{} has no instructions", item.id);
            assert!(!item.tips.is_empty(), "{} has no tips", item.id);
            assert!(item.servings > 0);
        }
    }

    #[test]
    fn test_bundled_images_ship_with_the_app() {
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let catalog = Catalog::bundled().unwrap();

        for item in catalog.records() {
            match item.image_source(&assets) {
                ImageSource::Bundled(path) => {
                    assert!(path.exists(), "{} points at missing {}", item.id, path.display())
                }
                other => panic!("{} should use a bundled image, got {:?}", item.id, other),
            }
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let catalog = Catalog::new(vec![
            record("c", "Chapli Kabab"),
            record("a", "Aloo Gosht"),
            record("b", "Biryani"),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![record("haleem", "Haleem"), record("haleem", "Haleem 2")]);
        match result {
            Err(Error::DuplicateRecordId { id }) => assert_eq!(id, "haleem"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(Catalog::from_json("[{\"id\": 1}]"), Err(Error::Json(_))));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}

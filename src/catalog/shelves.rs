//! Product catalog - maps product names to shelf locations
//!
//! Keys are stored in normalized form so they compare equal to candidates
//! extracted from normalized requests. Lemma aliases live in the same flat
//! map as the names they came from; every key maps to exactly one shelf.

use crate::core::error::{AssistError, Result};
use crate::nlp::lemma::lemmatize_phrase;
use crate::nlp::normalize::normalize;
use ahash::AHashMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    shelves: AHashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from (product, shelf) pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut catalog = Self::new();
        for (product, shelf) in pairs {
            catalog.insert(product.as_ref(), shelf)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON object of product name to shelf
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(entries) = value else {
            return Err(AssistError::InvalidCatalog(
                "catalog must be a JSON object".into(),
            ));
        };

        let mut catalog = Self::new();
        for (product, shelf) in entries {
            let Value::String(shelf) = shelf else {
                return Err(AssistError::InvalidCatalog(format!(
                    "shelf for {:?} is not a string",
                    product
                )));
            };
            catalog.insert(&product, shelf)?;
        }
        Ok(catalog)
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(products = catalog.len(), path = ?path, "loaded catalog");
        Ok(catalog)
    }

    /// Add a product
    ///
    /// Two names that normalize to the same key must agree on the shelf.
    pub fn insert(&mut self, product: &str, shelf: impl Into<String>) -> Result<()> {
        let key = normalize(product);
        if key.is_empty() {
            return Err(AssistError::InvalidCatalog(format!(
                "product name {:?} is empty after normalization",
                product
            )));
        }

        let shelf = shelf.into();
        if shelf.trim().is_empty() {
            return Err(AssistError::InvalidCatalog(format!(
                "product {:?} has an empty shelf",
                product
            )));
        }

        if let Some(existing) = self.shelves.get(&key) {
            if *existing != shelf {
                return Err(AssistError::InvalidCatalog(format!(
                    "product {:?} is listed on both {:?} and {:?}",
                    key, existing, shelf
                )));
            }
            return Ok(());
        }

        self.shelves.insert(key, shelf);
        Ok(())
    }

    /// Add the lemma of every key as an alias for the same shelf
    ///
    /// Existing keys are never overwritten.
    pub fn with_lemma_aliases(mut self) -> Self {
        let mut keys: Vec<&String> = self.shelves.keys().collect();
        keys.sort();

        let aliases: Vec<(String, String)> = keys
            .into_iter()
            .map(|key| (lemmatize_phrase(key), self.shelves[key].clone()))
            .filter(|(alias, _)| !self.shelves.contains_key(alias))
            .collect();

        let mut added = 0;
        for (alias, shelf) in aliases {
            // Two plurals can share a lemma; the alphabetically first keeps it
            if !self.shelves.contains_key(&alias) {
                self.shelves.insert(alias, shelf);
                added += 1;
            }
        }

        tracing::debug!(aliases = added, "added lemma aliases to catalog");
        self
    }

    /// Shelf for a normalized product key
    pub fn get(&self, product: &str) -> Option<&str> {
        self.shelves.get(product).map(String::as_str)
    }

    pub fn contains(&self, product: &str) -> bool {
        self.shelves.contains_key(product)
    }

    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    /// All product keys, in no particular order
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.shelves.keys().map(String::as_str)
    }

    /// Multi-word product keys, for seeding an entity gazetteer
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.products().filter(|key| key.contains([' ', ',']))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let catalog =
            Catalog::from_json_str(r#"{"Bread": "Aisle 3", "rice": "Aisle 5"}"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("bread"), Some("Aisle 3"));
        assert_eq!(catalog.get("Bread"), None);
        assert!(catalog.contains("rice"));
    }

    #[test]
    fn test_keys_are_normalized() {
        let catalog = Catalog::from_pairs([("  Peanut   Butter! ", "Aisle 2")]).unwrap();
        assert_eq!(catalog.get("peanut butter"), Some("Aisle 2"));
    }

    #[test]
    fn test_non_string_shelf_rejected() {
        let result = Catalog::from_json_str(r#"{"bread": 3}"#);
        assert!(matches!(result, Err(AssistError::InvalidCatalog(_))));
    }

    #[test]
    fn test_non_object_rejected() {
        let result = Catalog::from_json_str(r#"["bread", "rice"]"#);
        assert!(matches!(result, Err(AssistError::InvalidCatalog(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = Catalog::from_json_str("{bread: ");
        assert!(matches!(result, Err(AssistError::SerdeError(_))));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = Catalog::from_pairs([("?!", "Aisle 1")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_conflicting_duplicate_rejected() {
        let result = Catalog::from_pairs([("Milk", "Dairy"), ("milk", "Aisle 9")]);
        assert!(matches!(result, Err(AssistError::InvalidCatalog(_))));

        let agreeing = Catalog::from_pairs([("Milk", "Dairy"), ("milk", "Dairy")]).unwrap();
        assert_eq!(agreeing.len(), 1);
    }

    #[test]
    fn test_lemma_aliases() {
        let catalog = Catalog::from_pairs([
            ("apples", "Produce"),
            ("green beans", "Produce"),
            ("bread", "Bakery"),
        ])
        .unwrap()
        .with_lemma_aliases();

        assert_eq!(catalog.get("apple"), Some("Produce"));
        assert_eq!(catalog.get("green bean"), Some("Produce"));
        assert_eq!(catalog.get("bread"), Some("Bakery"));
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_aliases_never_overwrite_keys() {
        let catalog = Catalog::from_pairs([("eggs", "Dairy"), ("egg", "Aisle 7")])
            .unwrap()
            .with_lemma_aliases();

        assert_eq!(catalog.get("egg"), Some("Aisle 7"));
        assert_eq!(catalog.get("eggs"), Some("Dairy"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_shared_lemma_goes_to_first_key() {
        for pairs in [
            [("tomatoes", "Produce"), ("tomatos", "Aisle 9")],
            [("tomatos", "Aisle 9"), ("tomatoes", "Produce")],
        ] {
            let catalog = Catalog::from_pairs(pairs).unwrap().with_lemma_aliases();
            assert_eq!(catalog.get("tomato"), Some("Produce"));
            assert_eq!(catalog.get("tomatos"), Some("Aisle 9"));
            assert_eq!(catalog.len(), 3);
        }
    }

    #[test]
    fn test_phrases() {
        let catalog =
            Catalog::from_pairs([("olive oil", "Aisle 4"), ("milk", "Dairy")]).unwrap();
        let phrases: Vec<&str> = catalog.phrases().collect();
        assert_eq!(phrases, vec!["olive oil"]);

        let catalog = Catalog::from_pairs([("salt,pepper", "Aisle 6")]).unwrap();
        assert_eq!(catalog.phrases().count(), 1);
    }
}

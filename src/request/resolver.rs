//! Catalog resolution - keeps the candidates that name catalog products

use crate::catalog::Catalog;
use crate::request::extract::CandidateSet;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A candidate confirmed by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductMatch {
    pub product: String,
    pub shelf: String,
}

/// Matched products in candidate discovery order
///
/// Serializes as a JSON object of product to shelf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductMatches {
    matches: Vec<ProductMatch>,
}

impl ProductMatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, product: &str) -> Option<&str> {
        self.matches
            .iter()
            .find(|m| m.product == product)
            .map(|m| m.shelf.as_str())
    }

    pub fn contains(&self, product: &str) -> bool {
        self.get(product).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductMatch> {
        self.matches.iter()
    }

    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.product.as_str())
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn push(&mut self, product: &str, shelf: &str) {
        self.matches.push(ProductMatch {
            product: product.to_string(),
            shelf: shelf.to_string(),
        });
    }
}

impl Serialize for ProductMatches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.matches.len()))?;
        for m in &self.matches {
            map.serialize_entry(&m.product, &m.shelf)?;
        }
        map.end()
    }
}

/// Resolves candidate strings against the catalog
pub struct CatalogResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Keep the candidates that are catalog keys
    ///
    /// Misses are dropped without comment; most candidates are ordinary
    /// nouns that were never products.
    pub fn resolve(&self, candidates: &CandidateSet) -> ProductMatches {
        let mut matches = ProductMatches::new();
        for candidate in candidates.iter() {
            if let Some(shelf) = self.catalog.get(candidate) {
                matches.push(candidate, shelf);
            }
        }
        tracing::debug!(
            candidates = candidates.len(),
            matched = matches.len(),
            "resolved candidates against catalog"
        );
        matches
    }
}

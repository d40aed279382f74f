//! Product mention extraction
//!
//! Two independent passes over the annotated request, unioned:
//! - entity pass: spans labelled PRODUCT, FOOD or ORG
//! - token pass: common nouns that are not stop words
//!
//! Every candidate is equally plausible here; the catalog decides which
//! ones are real products.

use crate::core::types::ExtractionMode;
use crate::nlp::annotation::Doc;
use ahash::AHashSet;

/// Deduplicated candidate strings in discovery order
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    ordered: Vec<String>,
    seen: AHashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate (lowercased); returns false for duplicates and blanks
    pub fn insert(&mut self, candidate: &str) -> bool {
        let candidate = candidate.trim().to_lowercase();
        if candidate.is_empty() || self.seen.contains(&candidate) {
            return false;
        }
        self.seen.insert(candidate.clone());
        self.ordered.push(candidate);
        true
    }

    /// Add every candidate of `other` that is not already present
    pub fn extend(&mut self, other: &CandidateSet) {
        for candidate in other.iter() {
            self.insert(candidate);
        }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Candidates from named entities with a product-like label
pub fn entity_candidates(doc: &Doc, mode: ExtractionMode) -> CandidateSet {
    let mut candidates = CandidateSet::new();
    for ent in doc.ents.iter().filter(|e| e.label.names_product()) {
        candidates.insert(&ent.text);
        if mode.uses_lemmas() {
            if let Some(head) = doc.head_of(ent) {
                candidates.insert(&head.lemma);
            }
        }
    }
    candidates
}

/// Candidates from content nouns
pub fn noun_candidates(doc: &Doc, mode: ExtractionMode) -> CandidateSet {
    let mut candidates = CandidateSet::new();
    for token in doc.tokens.iter().filter(|t| t.is_content_noun()) {
        candidates.insert(&token.text);
        if mode.uses_lemmas() {
            candidates.insert(&token.lemma);
        }
    }
    candidates
}

/// Extract product candidates from an annotated request
pub fn extract_products(doc: &Doc, mode: ExtractionMode) -> CandidateSet {
    let mut candidates = entity_candidates(doc, mode);
    candidates.extend(&noun_candidates(doc, mode));
    tracing::debug!(
        candidates = candidates.len(),
        ?mode,
        "extracted product candidates"
    );
    candidates
}

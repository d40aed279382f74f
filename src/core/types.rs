//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse purpose of a shopping request
///
/// Exactly one intent is assigned per request. `List` is what a request
/// falls back to when no trigger word is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Plain shopping list ("I need bread and rice")
    #[default]
    List,
    /// Question about where something is ("where is the milk")
    Query,
    /// Request to find or fetch items ("find me some eggs")
    Locate,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::List => "list",
            Intent::Query => "query",
            Intent::Locate => "locate",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of the annotator's output the extractor uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Surface forms only
    Surface,
    /// Surface forms plus lemmas of nouns and entity heads
    #[default]
    LemmaAware,
}

impl ExtractionMode {
    pub fn uses_lemmas(&self) -> bool {
        matches!(self, ExtractionMode::LemmaAware)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_default_is_list() {
        assert_eq!(Intent::default(), Intent::List);
    }

    #[test]
    fn test_intent_serialization() {
        let json = serde_json::to_string(&Intent::Locate).unwrap();
        assert_eq!(json, "\"locate\"");

        let intent: Intent = serde_json::from_str("\"query\"").unwrap();
        assert_eq!(intent, Intent::Query);
    }

    #[test]
    fn test_intent_display() {
        assert_eq!(Intent::Query.to_string(), "query");
    }

    #[test]
    fn test_extraction_mode_deserialization() {
        let mode: ExtractionMode = serde_json::from_str("\"surface\"").unwrap();
        assert_eq!(mode, ExtractionMode::Surface);
        assert!(!mode.uses_lemmas());
        assert!(ExtractionMode::default().uses_lemmas());
    }
}

//! Replay annotations exported by an external NLP toolkit
//!
//! The export is JSON lines, one [`Doc`] per line. Docs are keyed by their
//! normalized text so a request normalized the same way finds its doc.

use crate::core::error::{AssistError, Result};
use crate::nlp::annotation::Doc;
use crate::nlp::annotator::Annotator;
use crate::nlp::normalize::normalize;
use ahash::AHashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct RecordedAnnotator {
    docs: AHashMap<String, Doc>,
}

impl RecordedAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse JSON lines; blank lines are skipped
    pub fn from_jsonl_str(content: &str) -> Result<Self> {
        let mut recorded = Self::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let doc: Doc = serde_json::from_str(line).map_err(|e| {
                AssistError::InvalidAnnotation(format!("line {}: {}", line_no + 1, e))
            })?;
            recorded.insert(doc)?;
        }
        Ok(recorded)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let recorded = Self::from_jsonl_str(&content)?;
        tracing::info!(docs = recorded.len(), path = ?path, "loaded recorded annotations");
        Ok(recorded)
    }

    /// Add a doc after checking its spans; a later doc for the same text wins
    pub fn insert(&mut self, doc: Doc) -> Result<()> {
        doc.validate()?;
        self.docs.insert(normalize(&doc.text), doc);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl Annotator for RecordedAnnotator {
    fn annotate(&self, text: &str) -> Result<Doc> {
        self.docs
            .get(&normalize(text))
            .cloned()
            .ok_or_else(|| AssistError::AnnotationMissing(text.to_string()))
    }
}

//! Request pipeline - raw text in, intent and shelf locations out
//!
//! normalize -> annotate -> classify + extract -> resolve
//!
//! Nothing here fails: an annotator error is logged and the request is
//! treated as having no tokens, which yields `list` and no products.

use crate::catalog::Catalog;
use crate::core::types::{ExtractionMode, Intent};
use crate::nlp::annotation::Doc;
use crate::nlp::annotator::Annotator;
use crate::nlp::normalize::normalize;
use crate::request::extract::extract_products;
use crate::request::intent::classify_intent;
use crate::request::resolver::{CatalogResolver, ProductMatches};
use serde::Serialize;

/// Result of processing one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestOutcome {
    pub intent: Intent,
    pub products: ProductMatches,
}

/// Processes shopping requests against a read-only catalog
pub struct Assistant<'a> {
    catalog: &'a Catalog,
    annotator: &'a dyn Annotator,
    mode: ExtractionMode,
}

impl<'a> Assistant<'a> {
    pub fn new(catalog: &'a Catalog, annotator: &'a dyn Annotator) -> Self {
        Self {
            catalog,
            annotator,
            mode: ExtractionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    /// Process raw user text
    pub fn process(&self, input: &str) -> RequestOutcome {
        let text = normalize(input);
        let doc = match self.annotator.annotate(&text) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "annotation failed, treating request as empty");
                Doc::empty(text)
            }
        };
        self.process_doc(&doc)
    }

    /// Process a request that has already been annotated
    pub fn process_doc(&self, doc: &Doc) -> RequestOutcome {
        let intent = classify_intent(doc);
        let candidates = extract_products(doc, self.mode);
        let products = CatalogResolver::new(self.catalog).resolve(&candidates);

        tracing::debug!(
            text = %doc.text,
            %intent,
            products = products.len(),
            "processed request"
        );

        RequestOutcome { intent, products }
    }
}

//! Request processing pipeline
//!
//! Converts raw shopping requests into shelf locations:
//! text -> Doc -> (Intent, CandidateSet) -> ProductMatches

pub mod extract;
pub mod intent;
pub mod pipeline;
pub mod resolver;

pub use extract::{extract_products, CandidateSet};
pub use intent::classify_intent;
pub use pipeline::{Assistant, RequestOutcome};
pub use resolver::{CatalogResolver, ProductMatch, ProductMatches};

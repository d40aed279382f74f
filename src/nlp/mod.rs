//! Text understanding: normalization, annotation, lemmatization

pub mod annotation;
pub mod annotator;
pub mod lemma;
pub mod normalize;
pub mod recorded;

pub use annotation::{Doc, EntityLabel, EntitySpan, PosTag, Token};
pub use annotator::{Annotator, LexiconAnnotator};
pub use normalize::normalize;
pub use recorded::RecordedAnnotator;

//! Annotated token stream consumed by the request pipeline
//!
//! The shape follows the JSON most NLP toolkits export for a parsed
//! document: a token list plus entity spans that index into it.

use crate::core::error::{AssistError, Result};
use serde::{Deserialize, Serialize};

/// Universal part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "PROPN")]
    ProperNoun,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "AUX")]
    Auxiliary,
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "ADP")]
    Adposition,
    #[serde(rename = "CCONJ")]
    Conjunction,
    #[serde(rename = "SCONJ")]
    SubordinatingConjunction,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "PUNCT")]
    Punctuation,
    /// Anything the tagger could not place
    #[serde(rename = "X")]
    #[serde(other)]
    Other,
}

/// Named-entity type label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Product,
    Food,
    Org,
    Person,
    Gpe,
    Loc,
    Norp,
    Date,
    Time,
    Cardinal,
    Quantity,
    Money,
    #[serde(other)]
    Other,
}

impl EntityLabel {
    /// Labels whose spans are treated as product mentions
    ///
    /// `Org` is included because brand names ("nutella", "heinz") are
    /// usually tagged as organizations.
    pub fn names_product(&self) -> bool {
        matches!(
            self,
            EntityLabel::Product | EntityLabel::Food | EntityLabel::Org
        )
    }
}

/// A single annotated token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appears in the normalized request
    pub text: String,
    /// Dictionary base form
    pub lemma: String,
    pub pos: PosTag,
    #[serde(default)]
    pub is_stop: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PosTag, is_stop: bool) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            is_stop,
        }
    }

    /// True for content nouns (common noun, not a stop word)
    pub fn is_content_noun(&self) -> bool {
        self.pos == PosTag::Noun && !self.is_stop
    }
}

/// A contiguous run of tokens recognized as a named entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    /// First token index (inclusive)
    pub start: usize,
    /// Last token index (exclusive)
    pub end: usize,
    /// Index of the syntactic head token
    pub head: usize,
}

/// An annotated request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    /// The normalized text that was annotated
    pub text: String,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub ents: Vec<EntitySpan>,
}

impl Doc {
    /// A doc with no tokens, used when annotation fails
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tokens: Vec::new(),
            ents: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Head token of an entity span
    pub fn head_of(&self, ent: &EntitySpan) -> Option<&Token> {
        self.tokens.get(ent.head)
    }

    /// Check that every entity span indexes into the token list
    pub fn validate(&self) -> Result<()> {
        let len = self.tokens.len();
        for ent in &self.ents {
            if ent.start >= ent.end || ent.end > len {
                return Err(AssistError::InvalidAnnotation(format!(
                    "entity {:?} spans tokens {}..{} but doc has {} tokens",
                    ent.text, ent.start, ent.end, len
                )));
            }
            if ent.head < ent.start || ent.head >= ent.end {
                return Err(AssistError::InvalidAnnotation(format!(
                    "entity {:?} head {} lies outside {}..{}",
                    ent.text, ent.head, ent.start, ent.end
                )));
            }
        }
        Ok(())
    }
}

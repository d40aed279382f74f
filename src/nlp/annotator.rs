//! Annotators turn normalized text into a [`Doc`]
//!
//! The request pipeline only depends on the [`Annotator`] trait. A
//! statistical model can sit behind it; the [`LexiconAnnotator`] here is a
//! deterministic word-list tagger that is good enough for shopping lists.

use crate::core::error::Result;
use crate::nlp::annotation::{Doc, EntityLabel, EntitySpan, PosTag, Token};
use crate::nlp::lemma::lemmatize;
use ahash::AHashMap;

/// Produces tokens, tags, lemmas and entity spans for normalized text
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Doc>;
}

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "you", "your", "yours", "he",
    "him", "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "what",
    "who", "whom", "whose", "anything", "something", "everything", "nothing", "someone",
    "anyone", "everyone", "one", "ones",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "all",
    "both", "no", "another", "which", "much", "many", "few", "several", "more", "most", "other",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "for", "from", "to", "with", "without", "by", "about", "near",
    "into", "onto", "over", "under", "up", "down", "out", "off", "around", "between",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "plus"];

const SUBORDINATORS: &[&str] = &["if", "because", "so", "than", "while", "whether"];

const AUXILIARIES: &[&str] = &[
    "be", "is", "are", "was", "were", "am", "been", "being", "do", "does", "did", "have", "has",
    "had", "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

const PARTICLES: &[&str] = &["not", "nt", "s"];

const ADVERBS: &[&str] = &[
    "where", "when", "how", "why", "here", "there", "also", "too", "just", "really", "very",
    "now", "today", "tonight", "again", "maybe", "then", "please", "quickly", "still",
];

const INTERJECTIONS: &[&str] = &["hi", "hello", "hey", "thanks", "thank", "ok", "okay", "yes"];

const VERBS: &[&str] = &[
    "need", "needs", "want", "wants", "buy", "buys", "buying", "bought", "find", "finds",
    "finding", "found", "locate", "locating", "get", "gets", "getting", "got", "grab", "pick",
    "look", "looking", "search", "searching", "like", "love", "make", "making", "made", "cook",
    "cooking", "bake", "baking", "go", "going", "went", "show", "tell", "help", "bring", "add",
    "check", "see", "know", "sell", "sells", "keep", "put", "take", "eat", "drink", "shopping",
];

const ADJECTIVES: &[&str] = &[
    "fresh", "organic", "frozen", "canned", "ripe", "whole", "large", "small", "big", "little",
    "good", "cheap", "cold", "hot", "healthy", "sweet", "spicy", "free", "low", "extra", "new",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "dozen",
    "half", "couple",
];

/// English stop words
///
/// A stop word that still tags as a noun never becomes a product
/// candidate.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "it", "its", "they", "them", "their", "what", "which", "who", "whom",
    "this", "that", "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "between",
    "into", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "then", "once", "here", "there", "when", "where", "why", "how", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very", "can", "will", "just", "should", "now", "also",
    "could", "would", "may", "might", "must", "please", "get", "make", "made", "see", "put",
    "anything", "something", "everything", "nothing", "someone", "anyone", "everyone", "one",
    "much", "many", "several", "another", "really", "still", "whole", "thing", "things", "lot",
    "s", "nt", "show", "take", "go", "keep", "plus",
];

/// Part-of-speech tag for a lowercase word from the closed-class lists
///
/// Anything not listed is assumed to be a common noun.
pub fn tag_word(word: &str) -> PosTag {
    if word == "," {
        return PosTag::Punctuation;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return PosTag::Numeral;
    }

    let lists: [(&[&str], PosTag); 12] = [
        (PRONOUNS, PosTag::Pronoun),
        (DETERMINERS, PosTag::Determiner),
        (ADPOSITIONS, PosTag::Adposition),
        (CONJUNCTIONS, PosTag::Conjunction),
        (SUBORDINATORS, PosTag::SubordinatingConjunction),
        (AUXILIARIES, PosTag::Auxiliary),
        (PARTICLES, PosTag::Particle),
        (ADVERBS, PosTag::Adverb),
        (INTERJECTIONS, PosTag::Interjection),
        (VERBS, PosTag::Verb),
        (ADJECTIVES, PosTag::Adjective),
        (NUMBER_WORDS, PosTag::Numeral),
    ];

    lists
        .iter()
        .find(|(words, _)| words.contains(&word))
        .map(|(_, tag)| *tag)
        .unwrap_or(PosTag::Noun)
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Split normalized text into words, with commas as their own tokens
fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for chunk in text.split_whitespace() {
        let mut rest = chunk;
        while let Some(pos) = rest.find(',') {
            if pos > 0 {
                words.push(&rest[..pos]);
            }
            words.push(",");
            rest = &rest[pos + 1..];
        }
        if !rest.is_empty() {
            words.push(rest);
        }
    }
    words
}

/// Word-list tagger with a phrase gazetteer for multi-word products
#[derive(Debug, Clone, Default)]
pub struct LexiconAnnotator {
    /// Space-joined token form -> phrase as given
    phrases: AHashMap<String, String>,
    longest_phrase: usize,
}

impl LexiconAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add phrases that should be recognized as product entities
    ///
    /// Single words are ignored; the token pass already sees them. A phrase
    /// with a comma ("salt, pepper") matches the same tokens in a request and
    /// the entity keeps the phrase's own spelling.
    pub fn with_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            let words = split_words(phrase.as_ref());
            if words.len() < 2 {
                continue;
            }
            self.longest_phrase = self.longest_phrase.max(words.len());
            self.phrases
                .insert(words.join(" "), phrase.as_ref().trim().to_string());
        }
        self
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Greedy longest-first phrase matching over the token list
    fn find_entities(&self, tokens: &[Token]) -> Vec<EntitySpan> {
        let mut ents = Vec::new();
        if self.phrases.is_empty() {
            return ents;
        }

        let mut start = 0;
        while start < tokens.len() {
            let max_len = self.longest_phrase.min(tokens.len() - start);
            let matched = (2..=max_len).rev().find_map(|len| {
                let joined = tokens[start..start + len]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                self.phrases.get(&joined).map(|text| (len, text.clone()))
            });

            match matched {
                Some((len, text)) => {
                    ents.push(EntitySpan {
                        text,
                        label: EntityLabel::Product,
                        start,
                        end: start + len,
                        head: start + len - 1,
                    });
                    start += len;
                }
                None => start += 1,
            }
        }

        ents
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Result<Doc> {
        let tokens: Vec<Token> = split_words(text)
            .into_iter()
            .map(|word| {
                let pos = tag_word(word);
                Token::new(word, lemmatize(word, pos), pos, is_stop_word(word))
            })
            .collect();

        let ents = self.find_entities(&tokens);
        tracing::trace!(tokens = tokens.len(), ents = ents.len(), "annotated request");

        Ok(Doc {
            text: text.to_string(),
            tokens,
            ents,
        })
    }
}

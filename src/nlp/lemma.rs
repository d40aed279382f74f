//! Rule-based English lemmatizer
//!
//! Covers the inflections that show up in shopping requests: plural nouns
//! and a handful of common verbs. Input is expected to be lowercase.

use crate::nlp::annotation::PosTag;

/// Plurals that the suffix rules get wrong
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("loaves", "loaf"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("shelves", "shelf"),
    ("calves", "calf"),
    ("cookies", "cookie"),
    ("brownies", "brownie"),
    ("smoothies", "smoothie"),
    ("veggies", "veggie"),
    ("zucchinies", "zucchini"),
    ("shoes", "shoe"),
    ("canoes", "canoe"),
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("am", "be"),
    ("been", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("did", "do"),
    ("got", "get"),
    ("gotten", "get"),
    ("found", "find"),
    ("bought", "buy"),
    ("went", "go"),
    ("gone", "go"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("made", "make"),
    ("brought", "bring"),
    ("kept", "keep"),
    ("sold", "sell"),
    ("told", "tell"),
    ("saw", "see"),
    ("seen", "see"),
];

/// Words ending in "s" that are already singular
const SINGULAR_S_ENDINGS: &[&str] = &["ss", "us", "is"];

fn lookup(table: &[(&str, &str)], word: &str) -> Option<String> {
    table
        .iter()
        .find(|(form, _)| *form == word)
        .map(|(_, lemma)| lemma.to_string())
}

/// Singular form of a (possibly plural) noun
pub fn singularize(word: &str) -> String {
    if let Some(lemma) = lookup(IRREGULAR_NOUNS, word) {
        return lemma;
    }

    // Short words ("gas", "yes") are left alone
    if word.chars().count() <= 3 || !word.ends_with('s') {
        return word.to_string();
    }

    if SINGULAR_S_ENDINGS.iter().any(|end| word.ends_with(end)) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{}y", stem);
    }

    if let Some(stem) = word.strip_suffix("oes") {
        return format!("{}o", stem);
    }

    for sibilant in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(sibilant) {
            return word[..word.len() - 2].to_string();
        }
    }

    word[..word.len() - 1].to_string()
}

fn verb_base(word: &str) -> String {
    if let Some(lemma) = lookup(IRREGULAR_VERBS, word) {
        return lemma;
    }

    // Third person singular only; "-ing" and "-ed" need a dictionary to undo
    match word.strip_suffix('s') {
        Some(stem) if stem.len() > 2 && !word.ends_with("ss") => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Lemma for a lowercase word given its part-of-speech tag
pub fn lemmatize(word: &str, pos: PosTag) -> String {
    match pos {
        PosTag::Noun => singularize(word),
        PosTag::Verb | PosTag::Auxiliary => verb_base(word),
        _ => word.to_string(),
    }
}

/// Lemma of a multi-word product name
///
/// English noun phrases are head-final, so only the last word changes:
/// "green apples" becomes "green apple".
pub fn lemmatize_phrase(phrase: &str) -> String {
    match phrase.rsplit_once(' ') {
        Some((modifiers, head)) => format!("{} {}", modifiers, singularize(head)),
        None => singularize(phrase),
    }
}

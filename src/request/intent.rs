//! Keyword intent classification
//!
//! Trigger words are compared against token surface forms exactly. Query
//! words are checked before locate words, so "where can i find milk" is a
//! query even though it contains "find".

use crate::core::types::Intent;
use crate::nlp::annotation::Doc;

pub const QUERY_WORDS: &[&str] = &["where", "what", "which"];
pub const LOCATE_WORDS: &[&str] = &["find", "locate", "get"];

fn mentions_any(doc: &Doc, words: &[&str]) -> bool {
    doc.tokens.iter().any(|t| words.contains(&t.text.as_str()))
}

/// Classify the intent of an annotated request
pub fn classify_intent(doc: &Doc) -> Intent {
    if mentions_any(doc, QUERY_WORDS) {
        Intent::Query
    } else if mentions_any(doc, LOCATE_WORDS) {
        Intent::Locate
    } else {
        Intent::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::annotation::{PosTag, Token};
    use proptest::prelude::*;

    fn doc_of(words: &[&str]) -> Doc {
        Doc {
            text: words.join(" "),
            tokens: words
                .iter()
                .map(|w| Token::new(*w, *w, PosTag::Other, false))
                .collect(),
            ents: Vec::new(),
        }
    }

    #[test]
    fn test_plain_list() {
        let doc = doc_of(&["i", "need", "bread", ",", "rice", "and", "chicken"]);
        assert_eq!(classify_intent(&doc), Intent::List);
    }

    #[test]
    fn test_query_words() {
        for word in QUERY_WORDS {
            assert_eq!(classify_intent(&doc_of(&[*word, "milk"])), Intent::Query);
        }
    }

    #[test]
    fn test_locate_words() {
        for word in LOCATE_WORDS {
            assert_eq!(classify_intent(&doc_of(&["please", *word, "eggs"])), Intent::Locate);
        }
    }

    #[test]
    fn test_query_beats_locate() {
        let doc = doc_of(&["where", "can", "i", "find", "milk"]);
        assert_eq!(classify_intent(&doc), Intent::Query);

        let doc = doc_of(&["get", "me", "whatever", "which", "is", "cheap"]);
        assert_eq!(classify_intent(&doc), Intent::Query);
    }

    #[test]
    fn test_no_partial_matches() {
        let doc = doc_of(&["wherever", "finding", "getting", "whatever"]);
        assert_eq!(classify_intent(&doc), Intent::List);
    }

    #[test]
    fn test_surface_form_not_lemma() {
        // "got" lemmatizes to "get" but triggers are matched on surface text
        let doc = Doc {
            text: "i got milk".into(),
            tokens: vec![
                Token::new("i", "i", PosTag::Pronoun, true),
                Token::new("got", "get", PosTag::Verb, false),
                Token::new("milk", "milk", PosTag::Noun, false),
            ],
            ents: Vec::new(),
        };
        assert_eq!(classify_intent(&doc), Intent::List);
    }

    #[test]
    fn test_empty_doc_is_list() {
        assert_eq!(classify_intent(&Doc::default()), Intent::List);
    }

    proptest! {
        #[test]
        fn prop_any_query_word_wins(
            words in proptest::collection::vec("[a-z]{1,8}", 0..8),
            query in proptest::sample::select(QUERY_WORDS.to_vec()),
            locate in proptest::sample::select(LOCATE_WORDS.to_vec()),
            at in 0usize..8,
        ) {
            let mut words = words;
            words.insert(at.min(words.len()), locate.to_string());
            words.insert(at.min(words.len()), query.to_string());
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            prop_assert_eq!(classify_intent(&doc_of(&refs)), Intent::Query);
        }
    }
}

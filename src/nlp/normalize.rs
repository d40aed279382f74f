//! Request text normalization
//!
//! Lowercases, drops everything except letters, numbers, underscore,
//! whitespace and commas, then collapses whitespace. Combining marks are
//! stripped, so a decomposed "e\u{301}" loses its accent, while numeric
//! characters such as "½" and "²" are kept. Commas survive because they
//! separate list items ("bread, rice and chicken").

use regex::Regex;
use std::sync::OnceLock;

static STRIPPED: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn stripped_chars() -> &'static Regex {
    STRIPPED.get_or_init(|| Regex::new(r"[^\p{L}\p{N}_\s,]").expect("static pattern compiles"))
}

fn whitespace_runs() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static pattern compiles"))
}

/// Normalize raw user text
///
/// Never fails; empty or punctuation-only input yields an empty string.
/// Applying it to its own output returns that output unchanged.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = stripped_chars().replace_all(&lowered, "");
    let collapsed = whitespace_runs().replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

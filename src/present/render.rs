//! Human-readable replies

use crate::core::types::Intent;
use crate::request::pipeline::RequestOutcome;

pub const NOTHING_FOUND: &str = "Sorry, I couldn't find any of those items in the store.";

/// Heading shown above the matched items
pub fn heading(intent: Intent) -> &'static str {
    match intent {
        Intent::Query => "Here's the location of your items:",
        Intent::Locate => "I've found these items for you:",
        Intent::List => "Here's where you can find your items:",
    }
}

/// Reply lines for an outcome
pub fn render(outcome: &RequestOutcome) -> Vec<String> {
    if outcome.products.is_empty() {
        return vec![NOTHING_FOUND.to_string()];
    }

    let mut lines = Vec::with_capacity(outcome.products.len() + 1);
    lines.push(heading(outcome.intent).to_string());
    for m in outcome.products.iter() {
        lines.push(format!("{:10} → {}", m.product, m.shelf));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::request::extract::CandidateSet;
    use crate::request::resolver::CatalogResolver;

    fn outcome(intent: Intent, products: &[&str]) -> RequestOutcome {
        let catalog = Catalog::from_pairs([
            ("bread", "Aisle 3"),
            ("peanut butter", "Aisle 2"),
        ])
        .unwrap();
        let mut candidates = CandidateSet::new();
        for product in products {
            candidates.insert(product);
        }
        RequestOutcome {
            intent,
            products: CatalogResolver::new(&catalog).resolve(&candidates),
        }
    }

    #[test]
    fn test_render_list() {
        let lines = render(&outcome(Intent::List, &["bread"]));
        assert_eq!(
            lines,
            vec![
                "Here's where you can find your items:".to_string(),
                "bread      → Aisle 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let lines = render(&outcome(Intent::Query, &["peanut butter"]));
        assert_eq!(lines[0], "Here's the location of your items:");
        assert_eq!(lines[1], "peanut butter → Aisle 2");
    }

    #[test]
    fn test_headings_differ_per_intent() {
        assert_ne!(heading(Intent::List), heading(Intent::Query));
        assert_ne!(heading(Intent::Query), heading(Intent::Locate));
        assert_eq!(heading(Intent::Locate), "I've found these items for you:");
    }

    #[test]
    fn test_render_nothing_found() {
        let lines = render(&outcome(Intent::Locate, &["car"]));
        assert_eq!(lines, vec![NOTHING_FOUND.to_string()]);
    }
}

//! The spec extractor: free-text description → [`AttributeMap`].

use catmatch_core::AttributeMap;

use crate::rules::RuleTable;
use crate::text::clean_text;

/// Extracts attributes from a product description using an ordered rule table.
///
/// The description is cleaned first (whitespace collapse, Arabic-numeral
/// folding). Each rule is applied against the cleaned text; only the leftmost
/// occurrence counts (first-match-wins per rule, not global). A rule's capture
/// groups are joined with a single space and stored under its label. Rules for
/// a label that is already populated are skipped, so table order is precedence
/// order. Rules that do not match contribute nothing.
///
/// An empty or whitespace-only description yields an empty map.
#[must_use]
pub fn extract(description: &str, table: &RuleTable) -> AttributeMap {
    let mut specs = AttributeMap::new();

    let cleaned = clean_text(description);
    if cleaned.is_empty() {
        return specs;
    }

    for rule in &table.rules {
        if specs.contains_key(&rule.label) {
            continue;
        }
        if let Some(captures) = rule.regex.captures(&cleaned) {
            let value = captures
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if !value.is_empty() {
                tracing::debug!(label = %rule.label, %value, "extracted attribute");
                specs.insert(rule.label.clone(), value);
            }
        }
    }

    specs
}

//! The three sub-scores (name, spec, price) and their weighted composite.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use catmatch_core::{AttributeKind, AttributeMap, MatchConfig};
use catmatch_extract::text::fold_arabic_numerals;

use crate::normalize::normalize_text;
use crate::similarity::token_set_ratio;

/// Name similarity in [0, 100]: token-set comparison of normalized names.
#[must_use]
pub fn name_similarity(scraped: &str, catalog: &str) -> f64 {
    token_set_ratio(&normalize_text(scraped), &normalize_text(catalog))
}

/// Label pairing similarity in [0, 100].
///
/// Labels that both resolve to a known [`AttributeKind`] compare by kind:
/// same kind is a perfect pairing, different kinds never pair, however close
/// their spellings. Only genuinely free-form labels fall back to fuzzy
/// token-set comparison.
#[must_use]
pub fn label_similarity(scraped_label: &str, catalog_label: &str) -> f64 {
    match (
        AttributeKind::from_label(scraped_label),
        AttributeKind::from_label(catalog_label),
    ) {
        (Some(a), Some(b)) if a == b => 100.0,
        (Some(_), Some(_)) => 0.0,
        _ => token_set_ratio(
            &normalize_text(scraped_label),
            &normalize_text(catalog_label),
        ),
    }
}

/// Spec similarity in [0, 100].
///
/// For each scraped attribute, the catalog map is searched for the
/// best-pairing label; a pairing is accepted only when its label similarity
/// strictly exceeds `label_threshold`. The attribute's score is the maximum
/// value similarity over accepted pairings, 0 if none pair. Scores average
/// over the scraped attributes only — catalog-side extras never penalize.
/// Either map empty → 0.
#[must_use]
pub fn spec_similarity(
    scraped: &AttributeMap,
    catalog: &AttributeMap,
    label_threshold: f64,
) -> f64 {
    if scraped.is_empty() || catalog.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for (label, value) in scraped {
        let normalized_value = normalize_text(value);
        let mut best = 0.0f64;
        for (catalog_label, catalog_value) in catalog {
            if label_similarity(label, catalog_label) > label_threshold {
                best = best.max(token_set_ratio(
                    &normalized_value,
                    &normalize_text(catalog_value),
                ));
            }
        }
        total += best;
    }

    // Non-empty map, so the count is at least 1.
    #[allow(clippy::cast_precision_loss)]
    let count = scraped.len() as f64;
    total / count
}

/// Price similarity in [0, 100]: `100 − |scraped − catalog| / max(catalog, 1)
/// × 100`, floored at 0. Any parse failure on either side yields 0 rather
/// than an error.
#[must_use]
pub fn price_similarity(scraped: &str, catalog: &str) -> f64 {
    let (Some(scraped), Some(catalog)) = (parse_price(scraped), parse_price(catalog)) else {
        return 0.0;
    };
    let denominator = if catalog == 0.0 { 1.0 } else { catalog };
    let difference_pct = (scraped - catalog).abs() / denominator * 100.0;
    (100.0 - difference_pct).max(0.0)
}

/// Parses a locale-formatted price string to a number by folding Arabic
/// numerals and stripping every non-digit, non-dot character. Returns `None`
/// for strings with no parseable numeric content (e.g. `"N/A"`, `""`, or
/// artifacts like `"1.2.3"`).
fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = fold_arabic_numerals(text)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()?.to_f64()
}

/// Weighted composite of the three sub-scores.
#[must_use]
pub fn composite_score(name: f64, spec: f64, price: f64, config: &MatchConfig) -> f64 {
    name * config.name_weight + spec * config.spec_weight + price * config.price_weight
}

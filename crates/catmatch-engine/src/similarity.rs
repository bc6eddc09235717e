//! Token-set string similarity.
//!
//! Scraped titles are verbose marketing strings while catalog names are
//! terse, so the comparison must be insensitive to word order and to one
//! name's tokens being a superset of the other's. The token-set construction
//! handles both: the shared-token core is compared against each side's full
//! token string, and a pure subset relation scores 100 regardless of how much
//! extra text the longer side carries.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Token-set similarity between two pre-normalized strings, in [0, 100].
///
/// Tokenizes on whitespace, splits the token sets into intersection and
/// per-side differences, and returns the best pairwise ratio among the
/// recombined strings (intersection alone, intersection + left difference,
/// intersection + right difference). Symmetric by construction.
///
/// Both inputs empty → 100 (trivially identical); exactly one empty → 0.
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }

    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let base = intersection.join(" ");
    let combined_a = combine(&base, &only_a);
    let combined_b = combine(&base, &only_b);

    pairwise_ratio(&base, &combined_a)
        .max(pairwise_ratio(&base, &combined_b))
        .max(pairwise_ratio(&combined_a, &combined_b))
}

/// Appends the sorted difference tokens to the shared-token base string.
fn combine(base: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        return base.to_string();
    }
    let rest = rest.join(" ");
    if base.is_empty() {
        rest
    } else {
        format!("{base} {rest}")
    }
}

fn pairwise_ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert!((token_set_ratio("amd ryzen 9", "amd ryzen 9") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn both_empty_score_100() {
        assert!((token_set_ratio("", "") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn one_empty_scores_0() {
        assert!(token_set_ratio("amd ryzen 9", "").abs() < f64::EPSILON);
        assert!(token_set_ratio("", "amd ryzen 9").abs() < f64::EPSILON);
    }

    #[test]
    fn word_order_is_irrelevant() {
        let score = token_set_ratio("9 ryzen amd", "amd ryzen 9");
        assert!((score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn token_subset_scores_100() {
        // Verbose marketing title vs terse catalog name.
        let score = token_set_ratio(
            "amd ryzen 9 5900x 12 core 24 thread unlocked desktop processor",
            "ryzen 9 5900x",
        );
        assert!((score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn is_symmetric() {
        let pairs = [
            ("amd ryzen 9", "ryzen 9 5900x"),
            ("intel core i7", "core i7 12700k"),
            ("16 gb ram laptop", "hp laptop 16gb"),
            ("", "something"),
        ];
        for (a, b) in pairs {
            assert!(
                (token_set_ratio(a, b) - token_set_ratio(b, a)).abs() < f64::EPSILON,
                "asymmetric for ({a:?}, {b:?})"
            );
        }
    }

    #[test]
    fn disjoint_tokens_score_low() {
        let score = token_set_ratio("blue office chair", "amd ryzen 9");
        assert!(score < 50.0, "got {score}");
    }

    #[test]
    fn partial_overlap_scores_between_extremes() {
        let score = token_set_ratio("amd ryzen 9", "ryzen 9 5900x");
        assert!(score > 50.0, "got {score}");
        assert!(score < 100.0, "got {score}");
    }

    #[test]
    fn score_is_within_bounds() {
        let pairs = [
            ("a", "b"),
            ("amd ryzen", "amd ryzen"),
            ("x y z", "z q"),
        ];
        for (a, b) in pairs {
            let score = token_set_ratio(a, b);
            assert!((0.0..=100.0).contains(&score), "out of bounds for ({a:?}, {b:?}): {score}");
        }
    }

    #[test]
    fn duplicate_tokens_collapse() {
        // Set semantics: repeated tokens count once.
        let score = token_set_ratio("ryzen ryzen 9", "ryzen 9");
        assert!((score - 100.0).abs() < f64::EPSILON);
    }
}

//! Candidate scoring and best-match selection.

use catmatch_core::{CatalogEntry, MatchConfig, MatchResult, ScrapedProduct};

use crate::error::EngineError;
use crate::score::{composite_score, name_similarity, price_similarity, spec_similarity};

/// Scores one catalog candidate against a scraped product, in [0, 100].
///
/// # Errors
///
/// Returns [`EngineError::MalformedSpecs`] if the candidate's stored specs
/// cannot be decoded. The caller decides whether to skip the candidate or
/// abort; [`rank_candidates`] skips.
pub fn score_candidate(
    scraped: &ScrapedProduct,
    entry: &CatalogEntry,
    config: &MatchConfig,
) -> Result<f64, EngineError> {
    let catalog_specs = entry
        .decode_specs()
        .map_err(|source| EngineError::MalformedSpecs {
            entry_id: entry.id,
            source,
        })?;

    let name = name_similarity(&scraped.name, &entry.name);
    let spec = spec_similarity(&scraped.specs, &catalog_specs, config.label_threshold);
    let price = price_similarity(&scraped.price, &entry.price);

    Ok(composite_score(name, spec, price, config))
}

/// Scores every catalog candidate and returns those at or above the
/// configured threshold, sorted by descending score with ties broken by
/// lowest catalog id.
///
/// Candidate faults are isolated: an entry that fails to score is logged at
/// WARN and excluded, and the scan continues over the remaining entries.
#[must_use]
pub fn rank_candidates(
    scraped: &ScrapedProduct,
    catalog: &[CatalogEntry],
    config: &MatchConfig,
) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = Vec::new();

    for entry in catalog {
        match score_candidate(scraped, entry, config) {
            Ok(score) if score >= config.threshold => {
                matches.push(MatchResult {
                    entry: entry.clone(),
                    score,
                });
            }
            Ok(score) => {
                tracing::trace!(entry_id = entry.id, score, "candidate below threshold");
            }
            Err(error) => {
                tracing::warn!(entry_id = entry.id, %error, "skipping unscoreable catalog entry");
            }
        }
    }

    matches.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });
    matches
}

/// Returns the best-scoring catalog candidate at or above the threshold, or
/// `None` when nothing clears it (including for an empty catalog).
#[must_use]
pub fn find_best_match(
    scraped: &ScrapedProduct,
    catalog: &[CatalogEntry],
    config: &MatchConfig,
) -> Option<MatchResult> {
    rank_candidates(scraped, catalog, config).into_iter().next()
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute label → value mapping extracted from unstructured text.
///
/// Keys are produced ad hoc by whichever extraction rule matched, so two maps
/// describing the same real attribute may carry different labels (`"Cores"`
/// vs `"core_count"`). Consumers must not assume a fixed key vocabulary; see
/// [`crate::attributes::AttributeKind`] for the canonical-kind table that
/// bounds the fuzzy-matching surface.
pub type AttributeMap = BTreeMap<String, String>;

/// A product listing scraped from a storefront, as handed over by the scrape
/// producer. Immutable for the duration of one match attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedProduct {
    pub name: String,
    /// Price text as scraped: locale-formatted, possibly `"N/A"`.
    pub price: String,
    #[serde(default)]
    pub link: String,
    /// Attributes extracted from the description by the spec extractor.
    #[serde(default)]
    pub specs: AttributeMap,
    /// Raw description text the specs were extracted from.
    #[serde(default)]
    pub description: String,
}

/// A reference record from the catalog store. Read-only from the engine's
/// perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub name: String,
    /// Price as a decimal string, exactly as stored (e.g. `"289.99"`).
    pub price: String,
    /// JSON-encoded [`AttributeMap`], exactly as stored. Decoded lazily per
    /// match attempt via [`CatalogEntry::decode_specs`].
    pub specs: String,
    pub link: Option<String>,
}

impl CatalogEntry {
    /// Decodes the stored specs string into an [`AttributeMap`].
    ///
    /// An empty or whitespace-only stored value decodes to the empty map;
    /// genuinely malformed JSON is an error so the candidate can be excluded
    /// from ranking rather than scored against garbage.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the stored value is non-empty and is
    /// not a valid JSON object of string values.
    pub fn decode_specs(&self) -> Result<AttributeMap, serde_json::Error> {
        if self.specs.trim().is_empty() {
            return Ok(AttributeMap::new());
        }
        serde_json::from_str(&self.specs)
    }
}

/// A catalog entry annotated with its composite similarity score ∈ [0, 100].
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub entry: CatalogEntry,
    pub score: f64,
}

/// The triple handed to the persistence sink for an accepted match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub scraped_product: ScrapedProduct,
    pub database_match: CatalogEntry,
    pub similarity_score: f64,
}

//! Comparison-form normalization for names, labels, and values.

/// Normalizes text for fuzzy comparison: lowercase, every run of
/// non-alphanumeric characters collapsed to a single space, no leading or
/// trailing separators.
///
/// Alphanumeric is Unicode-aware, so Arabic product names survive
/// normalization instead of collapsing to nothing.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut pending_space = false;
    for c in lower.chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

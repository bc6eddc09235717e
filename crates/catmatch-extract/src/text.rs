//! Text cleanup applied before pattern matching.
//!
//! Listings from Arabic-language storefronts mix Arabic-Indic numerals into
//! otherwise-parseable spec strings; folding them to Western digits first lets
//! one numeric pattern cover both scripts.

/// Replaces Arabic-Indic digits (U+0660–U+0669) with their Western
/// equivalents. All other characters pass through unchanged.
#[must_use]
pub fn fold_arabic_numerals(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '٠' => '0',
            '١' => '1',
            '٢' => '2',
            '٣' => '3',
            '٤' => '4',
            '٥' => '5',
            '٦' => '6',
            '٧' => '7',
            '٨' => '8',
            '٩' => '9',
            other => other,
        })
        .collect()
}

/// Collapses runs of whitespace to single spaces, trims, and folds
/// Arabic-Indic numerals. Empty input yields an empty string.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    fold_arabic_numerals(&collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_arabic_numerals_maps_all_ten_digits() {
        assert_eq!(fold_arabic_numerals("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    }

    #[test]
    fn fold_arabic_numerals_leaves_western_digits_alone() {
        assert_eq!(fold_arabic_numerals("16 GB"), "16 GB");
    }

    #[test]
    fn fold_arabic_numerals_preserves_arabic_letters() {
        assert_eq!(fold_arabic_numerals("١٦ جيجابايت"), "16 جيجابايت");
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  16   GB\t\nRAM "), "16 GB RAM");
    }

    #[test]
    fn clean_text_empty_input() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn clean_text_whitespace_only_input() {
        assert_eq!(clean_text(" \t\n "), "");
    }

    #[test]
    fn clean_text_folds_numerals_and_whitespace_together() {
        assert_eq!(clean_text("١٦  جيجابايت رام"), "16 جيجابايت رام");
    }
}

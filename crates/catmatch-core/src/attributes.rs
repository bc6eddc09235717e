//! Canonical attribute kinds for spec comparison.
//!
//! Extraction rules produce free-form labels, and the catalog stores whatever
//! labels its own ingestion produced, so `"Cores"` and `"core_count"` can name
//! the same attribute. Mapping both sides onto a known [`AttributeKind`] first
//! makes the common case deterministic; fuzzy label matching in the engine is
//! the fallback for labels no kind recognizes.

/// A recognized product-attribute kind with a canonical comparator: two labels
/// of the same kind always pair, regardless of surface spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Cores,
    Threads,
    BaseClock,
    BoostClock,
    Series,
    Ram,
    Ssd,
    Hdd,
    Processor,
    ScreenSize,
    OperatingSystem,
}

impl AttributeKind {
    /// Resolves a free-form label to a known kind, if any alias matches.
    ///
    /// Labels are canonicalized (lowercased, `_`/`-` folded to spaces,
    /// whitespace collapsed) before lookup, so `"core_count"`, `"Core-Count"`
    /// and `"core count"` all resolve to [`AttributeKind::Cores`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match canonicalize_label(label).as_str() {
            "cores" | "core" | "core count" | "cpu cores" | "number of cores" => Some(Self::Cores),
            "threads" | "thread count" | "cpu threads" | "number of threads" => {
                Some(Self::Threads)
            }
            "base clock" | "base clock speed" | "base frequency" => Some(Self::BaseClock),
            "boost clock" | "boost clock speed" | "boost frequency" | "max boost clock" => {
                Some(Self::BoostClock)
            }
            "series" | "product series" | "product line" => Some(Self::Series),
            "ram" | "memory" | "ram size" | "system memory" => Some(Self::Ram),
            "ssd" | "ssd capacity" | "ssd storage" => Some(Self::Ssd),
            "hdd" | "hdd capacity" | "hard drive" | "hard disk" => Some(Self::Hdd),
            "processor" | "cpu" | "processor type" | "cpu model" => Some(Self::Processor),
            "screen size" | "display size" | "screen" | "display" => Some(Self::ScreenSize),
            "operating system" | "os" => Some(Self::OperatingSystem),
            _ => None,
        }
    }

    /// The canonical label for this kind, as used in built-in rule tables.
    #[must_use]
    pub fn canonical_label(self) -> &'static str {
        match self {
            Self::Cores => "Cores",
            Self::Threads => "Threads",
            Self::BaseClock => "Base Clock",
            Self::BoostClock => "Boost Clock",
            Self::Series => "Series",
            Self::Ram => "RAM",
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
            Self::Processor => "Processor",
            Self::ScreenSize => "Screen Size",
            Self::OperatingSystem => "Operating System",
        }
    }
}

/// Folds a label into its lookup form: lowercase, `_` and `-` become spaces,
/// runs of whitespace collapse to a single space.
#[must_use]
pub fn canonicalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_label_lowercases() {
        assert_eq!(canonicalize_label("Cores"), "cores");
    }

    #[test]
    fn canonicalize_label_folds_underscores() {
        assert_eq!(canonicalize_label("core_count"), "core count");
    }

    #[test]
    fn canonicalize_label_folds_hyphens_and_collapses_spaces() {
        assert_eq!(canonicalize_label("  Base-Clock   Speed "), "base clock speed");
    }

    #[test]
    fn from_label_resolves_canonical_spelling() {
        assert_eq!(AttributeKind::from_label("Cores"), Some(AttributeKind::Cores));
    }

    #[test]
    fn from_label_resolves_snake_case_alias() {
        assert_eq!(
            AttributeKind::from_label("core_count"),
            Some(AttributeKind::Cores)
        );
    }

    #[test]
    fn from_label_resolves_ram_aliases() {
        assert_eq!(AttributeKind::from_label("Memory"), Some(AttributeKind::Ram));
        assert_eq!(AttributeKind::from_label("RAM"), Some(AttributeKind::Ram));
    }

    #[test]
    fn from_label_resolves_os_abbreviation() {
        assert_eq!(
            AttributeKind::from_label("OS"),
            Some(AttributeKind::OperatingSystem)
        );
    }

    #[test]
    fn from_label_unknown_is_none() {
        assert!(AttributeKind::from_label("Warranty Period").is_none());
    }

    #[test]
    fn same_kind_from_different_labels() {
        assert_eq!(
            AttributeKind::from_label("Cores"),
            AttributeKind::from_label("CPU-Cores")
        );
    }

    #[test]
    fn canonical_label_roundtrips_through_from_label() {
        for kind in [
            AttributeKind::Cores,
            AttributeKind::Threads,
            AttributeKind::BaseClock,
            AttributeKind::BoostClock,
            AttributeKind::Series,
            AttributeKind::Ram,
            AttributeKind::Ssd,
            AttributeKind::Hdd,
            AttributeKind::Processor,
            AttributeKind::ScreenSize,
            AttributeKind::OperatingSystem,
        ] {
            assert_eq!(AttributeKind::from_label(kind.canonical_label()), Some(kind));
        }
    }
}

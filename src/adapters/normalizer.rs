//! Regex-based address normalizer
//!
//! Lower-cases, expands common street abbreviations as whole words and
//! strips punctuation so that "123 Main St." and "123  main street" share a
//! lookup key.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::ports::AddressNormalizer;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

static UNIT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\s*").expect("static regex"));

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,]").expect("static regex"));

static ABBREVIATIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("st", "street"),
        ("ave", "avenue"),
        ("blvd", "boulevard"),
        ("dr", "drive"),
        ("rd", "road"),
        ("ln", "lane"),
        ("ct", "court"),
        ("pl", "place"),
        ("apt", "apartment"),
        ("unit", "#"),
    ]
    .into_iter()
    .map(|(abbr, full)| (Regex::new(&format!(r"\b{abbr}\b")).expect("static regex"), full))
    .collect()
});

/// Normalizer applying fixed abbreviation and punctuation rules
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexNormalizer;

impl RegexNormalizer {
    /// Create a normalizer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AddressNormalizer for RegexNormalizer {
    fn normalize(&self, raw_address: &str) -> String {
        let lowered = raw_address.trim().to_lowercase();
        if lowered.is_empty() {
            return String::new();
        }

        let mut normalized = WHITESPACE.replace_all(&lowered, " ").into_owned();
        for (pattern, replacement) in ABBREVIATIONS.iter() {
            normalized = pattern.replace_all(&normalized, *replacement).into_owned();
        }
        normalized = UNIT_MARKER.replace_all(&normalized, "#").into_owned();
        normalized = PUNCTUATION.replace_all(&normalized, "").into_owned();

        WHITESPACE.replace_all(normalized.trim(), " ").into_owned()
    }
}

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical text form used for every cross-feed name comparison: NFD
/// decomposition, combining marks stripped, lowercased, trimmed.
/// Both sides of a comparison must go through this.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Odds feeds tag amateurs with a trailing "(a)" or "(am)" the rankings
/// feed never carries.
#[must_use]
pub fn strip_amateur_marker(s: &str) -> &str {
    let trimmed = s.trim();
    for marker in ["(a)", "(A)", "(am)", "(AM)", "(Am)"] {
        if let Some(stripped) = trimmed.strip_suffix(marker) {
            return stripped.trim_end();
        }
    }
    trimmed
}

/// Last whitespace-delimited token of an already-normalized name.
#[must_use]
pub fn surname(normalized: &str) -> &str {
    normalized.split_whitespace().next_back().unwrap_or(normalized)
}

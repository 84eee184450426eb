//! Case- and whitespace-insensitive substring matching, the sole text
//! primitive of the search pipeline. No fuzzy or edit-distance matching.

/// Lower-cases and strips every whitespace run.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<String>()
}

/// True when `needle` occurs in `haystack` either as a plain case-insensitive
/// substring or after whitespace stripping on both sides, so "mac book"
/// matches "MacBook" and "macbook" matches "Mac Book Pro".
///
/// An empty or whitespace-only side never matches.
pub fn matches(haystack: &str, needle: &str) -> bool {
    let direct_haystack = haystack.to_lowercase();
    let direct_needle = needle.to_lowercase();
    if direct_haystack.trim().is_empty() || direct_needle.trim().is_empty() {
        return false;
    }

    if direct_haystack.contains(direct_needle.trim()) {
        return true;
    }

    normalize(haystack).contains(&normalize(needle))
}

/// Title-or-description match. A missing description is a non-match for that
/// field only, not for the entity.
pub fn matches_listing(query: &str, title: &str, description: Option<&str>) -> bool {
    matches(title, query) || description.is_some_and(|d| matches(d, query))
}

//! Direct window comparison.

use crate::options::MatchOptions;

/// Start offsets of every occurrence of `pattern` in `text`.
///
/// An empty pattern, or one longer than the text, has no occurrences.
#[must_use]
pub fn find_substrings(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    find_windows(text, pattern, |t, p| t == p)
}

/// Start offsets where `pattern` matches `text`, with `?` matching any byte.
#[must_use]
pub fn find_matches(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    find_matches_with(text, pattern, &MatchOptions::default())
}

/// [`find_matches`] with a custom wildcard byte.
#[must_use]
pub fn find_matches_with(text: &[u8], pattern: &[u8], options: &MatchOptions) -> Vec<usize> {
    let wildcard = options.wildcard;
    find_windows(text, pattern, |t, p| p == wildcard || t == p)
}

fn find_windows(text: &[u8], pattern: &[u8], matches: impl Fn(u8, u8) -> bool) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| window.iter().zip(pattern).all(|(&t, &p)| matches(t, p)))
        .map(|(start, _)| start)
        .collect()
}

//! Dispatch by algorithm and pattern kind, and multi-pattern search.

use rayon::prelude::*;

use crate::convolution::{find_matches_fft_with, find_substrings_fft};
use crate::naive::{find_matches_with, find_substrings};
use crate::options::{Algorithm, MatchOptions, PatternKind};

/// Run one search with the chosen algorithm.
#[must_use]
pub fn search(
    text: &[u8],
    pattern: &[u8],
    kind: PatternKind,
    algorithm: Algorithm,
    options: &MatchOptions,
) -> Vec<usize> {
    match (kind, algorithm) {
        (PatternKind::Exact, Algorithm::Naive) => find_substrings(text, pattern),
        (PatternKind::Exact, Algorithm::Fft) => find_substrings_fft(text, pattern),
        (PatternKind::Wildcard, Algorithm::Naive) => find_matches_with(text, pattern, options),
        (PatternKind::Wildcard, Algorithm::Fft) => find_matches_fft_with(text, pattern, options),
    }
}

/// Search several patterns against the same text in parallel.
///
/// Results are returned in pattern order. Each search owns its buffers, so
/// the patterns are independent rayon tasks.
#[must_use]
pub fn search_many<P>(
    text: &[u8],
    patterns: &[P],
    kind: PatternKind,
    algorithm: Algorithm,
    options: &MatchOptions,
) -> Vec<Vec<usize>>
where
    P: AsRef<[u8]> + Sync,
{
    tracing::debug!(
        patterns = patterns.len(),
        algorithm = algorithm.name(),
        "multi-pattern search"
    );
    patterns
        .par_iter()
        .map(|pattern| search(text, pattern.as_ref(), kind, algorithm, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &[u8] = b"the cat sat on the mat with the hat";

    #[test]
    fn dispatch_agrees_across_algorithms() {
        let options = MatchOptions::default();
        for (pattern, kind) in [
            (&b"the"[..], PatternKind::Exact),
            (&b"at"[..], PatternKind::Exact),
            (&b"?at"[..], PatternKind::Wildcard),
            (&b"t?e"[..], PatternKind::Wildcard),
        ] {
            let naive = search(TEXT, pattern, kind, Algorithm::Naive, &options);
            let fft = search(TEXT, pattern, kind, Algorithm::Fft, &options);
            assert_eq!(naive, fft, "pattern {:?}", String::from_utf8_lossy(pattern));
        }
    }

    #[test]
    fn search_many_preserves_order() {
        let patterns = ["the", "at", "zzz"];
        let results = search_many(
            TEXT,
            &patterns,
            PatternKind::Exact,
            Algorithm::Fft,
            &MatchOptions::default(),
        );
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], vec![0, 15, 28]);
        assert_eq!(results[1], vec![5, 9, 20, 33]);
        assert!(results[2].is_empty());
    }

    #[test]
    fn wildcard_kind_uses_options() {
        let options = MatchOptions { wildcard: b'_' };
        let found = search(TEXT, b"_at", PatternKind::Wildcard, Algorithm::Fft, &options);
        assert_eq!(found, vec![4, 8, 19, 32]);
        let literal = search(TEXT, b"?at", PatternKind::Wildcard, Algorithm::Naive, &options);
        assert!(literal.is_empty());
    }
}

//! Substring search through polynomial multiplication.
//!
//! Bytes are encoded by their ordinal value. The text polynomial times the
//! reversed pattern polynomial has, at index `m - 1 + i`, the dot product
//! of the pattern with the text window starting at `i`. From those dot
//! products a per-window mismatch score is assembled; a window matches
//! exactly when its score rounds to zero.

use polyfft_poly::Polynomial;

use crate::options::MatchOptions;

/// Start offsets of every occurrence of `pattern` in `text`, computed from
/// the sum of squared differences `Σ (p_j - t_{i+j})²`.
///
/// An empty pattern, or one longer than the text, has no occurrences.
#[must_use]
pub fn find_substrings_fft(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    let m = pattern.len();

    let text_values = encode(text);
    let reversed = encode_reversed(pattern, None);

    let pattern_squares: f64 = reversed.iter().map(|p| p * p).sum();
    let text_squares: Vec<f64> = text_values.iter().map(|t| t * t).collect();
    let cross = convolve(&text_values, &reversed);

    let scores = sliding_sums(&text_squares, m)
        .into_iter()
        .enumerate()
        .map(|(i, window_squares)| pattern_squares - 2.0 * cross[m - 1 + i] + window_squares);

    let found = zero_score_offsets(scores);
    tracing::debug!(
        text_len = text.len(),
        pattern_len = m,
        found = found.len(),
        "fft substring search"
    );
    found
}

/// Start offsets where `pattern` matches `text`, with `?` matching any byte.
#[must_use]
pub fn find_matches_fft(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    find_matches_fft_with(text, pattern, &MatchOptions::default())
}

/// [`find_matches_fft`] with a custom wildcard byte.
///
/// Wildcards are encoded as zero and every other byte as its ordinal plus
/// one, so a NUL pattern byte is not mistaken for a wildcard. The score
/// `Σ p_j · (p_j - t_{i+j})²` expands to
/// `Σp³ - 2·(T * P²)[m-1+i] + (T² * P)[m-1+i]`, and every wildcard term
/// vanishes regardless of the text byte under it.
#[must_use]
pub fn find_matches_fft_with(text: &[u8], pattern: &[u8], options: &MatchOptions) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    let m = pattern.len();

    let text_values: Vec<f64> = encode(text).into_iter().map(|t| t + 1.0).collect();
    let text_squares: Vec<f64> = text_values.iter().map(|t| t * t).collect();
    let reversed = encode_reversed(pattern, Some(options.wildcard));
    let reversed_squares: Vec<f64> = reversed.iter().map(|p| p * p).collect();

    let pattern_cubes: f64 = reversed.iter().map(|p| p * p * p).sum();
    let text_by_pattern_squares = convolve(&text_values, &reversed_squares);
    let text_squares_by_pattern = convolve(&text_squares, &reversed);

    let scores = (0..=text.len() - m).map(|i| {
        let at = m - 1 + i;
        pattern_cubes - 2.0 * text_by_pattern_squares[at] + text_squares_by_pattern[at]
    });

    let found = zero_score_offsets(scores);
    tracing::debug!(
        text_len = text.len(),
        pattern_len = m,
        found = found.len(),
        "fft wildcard search"
    );
    found
}

fn encode(bytes: &[u8]) -> Vec<f64> {
    bytes.iter().map(|&b| f64::from(b)).collect()
}

/// Reverse the pattern and encode it.
///
/// Without a wildcard each byte is its ordinal. With one, the wildcard
/// becomes 0 and every other byte its ordinal plus one.
fn encode_reversed(pattern: &[u8], wildcard: Option<u8>) -> Vec<f64> {
    pattern
        .iter()
        .rev()
        .map(|&b| match wildcard {
            None => f64::from(b),
            Some(w) if b == w => 0.0,
            Some(_) => f64::from(b) + 1.0,
        })
        .collect()
}

/// Real parts of the linear convolution of `a` and `b`.
fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let product =
        Polynomial::from_reals(a.iter().copied()) * Polynomial::from_reals(b.iter().copied());
    product.into_coefficients().into_iter().map(|c| c.re).collect()
}

/// Sums of every run of `width` consecutive values.
fn sliding_sums(values: &[f64], width: usize) -> Vec<f64> {
    let mut sums = Vec::with_capacity(values.len() + 1 - width);
    let mut running: f64 = values[..width].iter().sum();
    sums.push(running);
    for (incoming, outgoing) in values[width..].iter().zip(values) {
        running += incoming - outgoing;
        sums.push(running);
    }
    sums
}

fn zero_score_offsets(scores: impl Iterator<Item = f64>) -> Vec<usize> {
    scores
        .enumerate()
        .filter(|(_, score)| score.abs() < 0.5)
        .map(|(start, _)| start)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::{find_matches, find_substrings};

    #[test]
    fn exact_repeated_byte() {
        assert_eq!(find_substrings_fft(b"aaaa", b"a"), vec![0, 1, 2, 3]);
        assert_eq!(find_substrings_fft(b"aaaa", b"a"), find_substrings(b"aaaa", b"a"));
    }

    #[test]
    fn exact_whole_text() {
        assert_eq!(
            find_substrings_fft(b"ababab", b"ababab"),
            find_substrings(b"ababab", b"ababab")
        );
        assert_eq!(find_substrings_fft(b"ababab", b"bab"), vec![1, 3]);
    }

    #[test]
    fn wildcard_repeated_byte() {
        assert_eq!(find_matches_fft(b"aaaa", b"a?"), vec![0, 1, 2]);
        assert_eq!(find_matches_fft(b"aaaa", b"a?"), find_matches(b"aaaa", b"a?"));
    }

    #[test]
    fn wildcard_mixed_pattern() {
        assert_eq!(
            find_matches_fft(b"ababab", b"a??b?b"),
            find_matches(b"ababab", b"a??b?b")
        );
        assert_eq!(find_matches_fft(b"hey jude", b"?e?"), vec![0]);
    }

    #[test]
    fn custom_wildcard() {
        let options = MatchOptions { wildcard: b'*' };
        assert_eq!(
            find_matches_fft_with(b"cat cot cut", b"c*t", &options),
            vec![0, 4, 8]
        );
    }

    #[test]
    fn all_wildcards_match_everywhere() {
        assert_eq!(find_matches_fft(b"abcd", b"??"), vec![0, 1, 2]);
    }

    #[test]
    fn high_bytes_are_handled() {
        let text = [0u8, 255, 254, 255, 254, 0];
        assert_eq!(find_substrings_fft(&text, &[255, 254]), vec![1, 3]);
        assert_eq!(find_matches_fft(&text, &[255, b'?', 0]), vec![3]);
    }

    #[test]
    fn nul_pattern_byte_is_not_a_wildcard() {
        let text = [7u8, 1, 0, 7, 1, 9];
        assert_eq!(find_matches_fft(&text, &[7, 1, 0]), vec![0]);
        assert_eq!(find_matches_fft(&text, &[7, 1, 0]), find_matches(&text, &[7, 1, 0]));
    }

    #[test]
    fn degenerate_inputs() {
        assert!(find_substrings_fft(b"", b"a").is_empty());
        assert!(find_substrings_fft(b"abc", b"").is_empty());
        assert!(find_substrings_fft(b"ab", b"abc").is_empty());
        assert!(find_matches_fft(b"ab", b"a??").is_empty());
    }

    #[test]
    fn sliding_sums_cover_every_window() {
        assert_eq!(sliding_sums(&[1.0, 2.0, 3.0, 4.0], 2), vec![3.0, 5.0, 7.0]);
        assert_eq!(sliding_sums(&[5.0], 1), vec![5.0]);
    }
}

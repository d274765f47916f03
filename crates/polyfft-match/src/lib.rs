//! # polyfft-match
//!
//! Substring search over byte strings, exact and with a wildcard byte.
//! Each search comes in two flavors: direct window comparison, and a
//! sum-of-squared-differences score computed with FFT polynomial products.
//!
//! # Example
//! ```
//! assert_eq!(polyfft_match::find_substrings_fft(b"aaaa", b"a"), vec![0, 1, 2, 3]);
//! assert_eq!(polyfft_match::find_matches_fft(b"aaaa", b"a?"), vec![0, 1, 2]);
//! ```

pub mod batch;
pub mod convolution;
pub mod naive;
pub mod options;

// Re-exports
pub use batch::{search, search_many};
pub use convolution::{find_matches_fft, find_matches_fft_with, find_substrings_fft};
pub use naive::{find_matches, find_matches_with, find_substrings};
pub use options::{Algorithm, MatchOptions, PatternKind, DEFAULT_WILDCARD};

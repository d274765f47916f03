//! Search options and algorithm selection.

/// Byte that matches any text byte in wildcard searches.
pub const DEFAULT_WILDCARD: u8 = b'?';

/// Tunables for wildcard searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Pattern byte that matches anything.
    pub wildcard: u8,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
        }
    }
}

/// Whether the pattern is literal or may contain wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Every pattern byte must match.
    Exact,
    /// The wildcard byte matches any text byte.
    Wildcard,
}

/// Search implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Direct comparison of every window, O(n·m).
    Naive,
    /// Mismatch scores from FFT polynomial products, O(n log n).
    Fft,
}

impl Algorithm {
    /// Short name used in logs and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Fft => "fft",
        }
    }
}

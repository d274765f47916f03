//! Error type for transform preconditions.

/// Contract violations raised by the transform entry points.
///
/// These are programming errors on the caller's side and are reported
/// synchronously at the offending call. Numeric drift is never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A root of unity or a naive transform was requested for degree 0.
    #[error("transform degree must be at least 1")]
    ZeroDegree,

    /// Padding target is shorter than the input.
    #[error("padding target {target} is shorter than the input length {len}")]
    PaddingTooShort {
        /// Requested length.
        target: usize,
        /// Current length of the input.
        len: usize,
    },

    /// A fast transform was called with a degree that is not a power of two.
    #[error("fast transform degree must be a power of two, got {0}")]
    NotPowerOfTwo(usize),

    /// The convolution length does not fit in `usize`.
    #[error("convolution of length {0} exceeds the addressable transform size")]
    LengthOverflow(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = TransformError::PaddingTooShort { target: 2, len: 3 };
        assert!(err.to_string().contains("2"));
        assert!(err.to_string().contains("3"));
        assert!(TransformError::NotPowerOfTwo(6).to_string().contains('6'));
    }
}

//! Error type for polynomial operations.

use polyfft_transform::TransformError;

/// Errors raised by the fallible polynomial entry points.
///
/// The operator traits cannot return errors; they panic on these
/// conditions instead, which only occur when a result would not fit in
/// memory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolyError {
    /// The underlying transform rejected its input.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The coefficient count of a power does not fit in `usize`.
    #[error("raising a {degree}-coefficient polynomial to the power {exponent} overflows")]
    DegreeOverflow {
        /// Coefficient count of the base.
        degree: usize,
        /// Requested exponent.
        exponent: usize,
    },
}

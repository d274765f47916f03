//! Zero padding and transform length selection.

use num_traits::Zero;

use crate::error::TransformError;
use crate::scalar::{Complex, Precision};

/// Copy `data` and append zeros up to `target_len`.
///
/// # Errors
///
/// Returns [`TransformError::PaddingTooShort`] when `target_len` is less
/// than `data.len()`. Padding never truncates.
pub fn pad<T: Precision>(
    data: &[Complex<T>],
    target_len: usize,
) -> Result<Vec<Complex<T>>, TransformError> {
    if target_len < data.len() {
        return Err(TransformError::PaddingTooShort {
            target: target_len,
            len: data.len(),
        });
    }
    let mut padded = Vec::with_capacity(target_len);
    padded.extend_from_slice(data);
    padded.resize(target_len, Complex::zero());
    Ok(padded)
}

/// Whether the fast transforms accept a vector of length `n`.
#[must_use]
pub fn is_transform_length(n: usize) -> bool {
    n.is_power_of_two()
}

/// Transform length for the linear convolution of two sequences.
///
/// Cyclic convolution of length `L` equals linear convolution when
/// `L >= a_len + b_len - 1`; this returns the smallest power of two with
/// that property. Empty inputs yield 1.
///
/// # Errors
///
/// Returns [`TransformError::LengthOverflow`] when the length does not fit
/// in `usize`.
pub fn convolution_length(a_len: usize, b_len: usize) -> Result<usize, TransformError> {
    let linear = a_len
        .checked_add(b_len)
        .ok_or(TransformError::LengthOverflow(usize::MAX))?
        .saturating_sub(1)
        .max(1);
    linear
        .checked_next_power_of_two()
        .ok_or(TransformError::LengthOverflow(linear))
}

//! Roots of unity and transform direction.

use num_traits::One;

use crate::error::TransformError;
use crate::scalar::{from_len, Complex, Precision};

/// Which way a transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Coefficients to point values, phase factors `ω = e^{2πi/n}`.
    Forward,
    /// Point values back to coefficients, phase factors `ω⁻¹`, scaled by `1/n`.
    Inverse,
}

impl Direction {
    /// Phase factor of degree `n` for this direction. `n` must be nonzero.
    pub(crate) fn root<T: Precision>(self, n: usize) -> Complex<T> {
        let root = principal_root(n);
        match self {
            Self::Forward => root,
            Self::Inverse => invert(root),
        }
    }
}

/// Principal `degree`-th root of unity `e^{2πi/degree}`.
///
/// `root_of_unity(1)` is exactly `1 + 0i`.
///
/// # Errors
///
/// Returns [`TransformError::ZeroDegree`] when `degree == 0`.
pub fn root_of_unity<T: Precision>(degree: usize) -> Result<Complex<T>, TransformError> {
    if degree == 0 {
        return Err(TransformError::ZeroDegree);
    }
    Ok(principal_root(degree))
}

/// Inverse of the principal root, `conj(ω) / |ω|²`.
///
/// # Errors
///
/// Returns [`TransformError::ZeroDegree`] when `degree == 0`.
pub fn inverse_root_of_unity<T: Precision>(degree: usize) -> Result<Complex<T>, TransformError> {
    root_of_unity(degree).map(invert)
}

fn principal_root<T: Precision>(degree: usize) -> Complex<T> {
    if degree == 1 {
        return Complex::one();
    }
    let angle = (T::PI() + T::PI()) / from_len::<T>(degree);
    Complex::new(angle.cos(), angle.sin())
}

fn invert<T: Precision>(root: Complex<T>) -> Complex<T> {
    root.conj() / root.norm_sqr()
}

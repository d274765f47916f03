//! Polynomial representation and approximate equality.

use num_traits::{One, Zero};
use polyfft_transform::{Complex, Precision};

/// Polynomial `Σ cᵢ xⁱ` over complex coefficients of precision `T`.
///
/// The degree reported by [`degree`](Self::degree) is the number of stored
/// coefficients, not the mathematical degree: an empty polynomial has
/// degree 0 and a constant has degree 1. Trailing zeros are kept.
///
/// The buffer is owned; `clone` is deep.
#[derive(Debug, Clone, Default)]
pub struct Polynomial<T: Precision> {
    pub(crate) coefficients: Vec<Complex<T>>,
}

impl<T: Precision> Polynomial<T> {
    /// Create a polynomial from its coefficients, lowest power first.
    #[must_use]
    pub fn new(coefficients: Vec<Complex<T>>) -> Self {
        Self { coefficients }
    }

    /// Create a polynomial from real coefficients, lowest power first.
    #[must_use]
    pub fn from_reals<I>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        coefficients
            .into_iter()
            .map(|re| Complex::new(re, T::zero()))
            .collect()
    }

    /// The polynomial with no coefficients.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vec::new())
    }

    /// The constant polynomial `1`, the identity for multiplication.
    #[must_use]
    pub fn one() -> Self {
        Self::new(vec![Complex::one()])
    }

    /// Number of stored coefficients.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the polynomial has no coefficients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Coefficients, lowest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[Complex<T>] {
        &self.coefficients
    }

    /// Consume the polynomial and return its coefficient buffer.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<Complex<T>> {
        self.coefficients
    }

    /// Real parts rounded to the nearest integer.
    ///
    /// Values outside the `i64` range saturate.
    #[must_use]
    pub fn rounded_coefficients(&self) -> Vec<i64> {
        self.coefficients.iter().map(|c| round_to_i64(c.re)).collect()
    }

    /// Resize to exactly `degree` coefficients, zero-filling new slots.
    pub(crate) fn set_degree(&mut self, degree: usize) {
        self.coefficients.resize(degree, Complex::zero());
    }
}

impl<T: Precision> From<Vec<Complex<T>>> for Polynomial<T> {
    fn from(coefficients: Vec<Complex<T>>) -> Self {
        Self::new(coefficients)
    }
}

impl<T: Precision> FromIterator<Complex<T>> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = Complex<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Equality after rounding real parts to integers.
///
/// Only the real part takes part in the comparison. This is sound when
/// every operand started from real integer coefficients, so that the
/// imaginary channel only carries convolution noise; it is meaningless for
/// genuinely complex or fractional coefficients.
///
/// Polynomials of different lengths compare equal when the overlap matches
/// and every extra coefficient of the longer one rounds to zero.
impl<T: Precision> PartialEq for Polynomial<T> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        let (shorter, longer) = if self.degree() <= other.degree() {
            (&self.coefficients, &other.coefficients)
        } else {
            (&other.coefficients, &self.coefficients)
        };

        let overlap_matches = shorter
            .iter()
            .zip(longer.iter())
            .all(|(a, b)| a.re.round() == b.re.round());

        overlap_matches
            && longer[shorter.len()..]
                .iter()
                .all(|c| c.re.round() == T::zero())
    }
}

pub(crate) fn round_to_i64<T: Precision>(value: T) -> i64 {
    let rounded = value.round();
    rounded.to_i64().unwrap_or(if rounded < T::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

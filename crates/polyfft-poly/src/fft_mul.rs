//! Polynomial multiplication by fast convolution.
//!
//! Both operands are zero-padded to a common power-of-two length that
//! holds the whole linear convolution, transformed, multiplied pointwise,
//! and transformed back. Squaring reuses a single forward transform.

use std::ops::{Mul, MulAssign};

use polyfft_transform::{convolution_length, fft, ifft, pad, Complex, Precision};

use crate::arith::forward_binop;
use crate::error::PolyError;
use crate::polynomial::Polynomial;

impl<T: Precision> Polynomial<T> {
    /// Multiply in place by `other`.
    ///
    /// The result has `degree() + other.degree() - 1` coefficients. If
    /// either operand is empty the result is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Transform`] when the convolution length does
    /// not fit in `usize`.
    pub fn try_mul_assign(&mut self, other: &Self) -> Result<(), PolyError> {
        if self.is_empty() || other.is_empty() {
            self.coefficients.clear();
            return Ok(());
        }

        let result_degree = self.degree() + other.degree() - 1;
        let working = convolution_length(self.degree(), other.degree())?;
        tracing::debug!(
            lhs = self.degree(),
            rhs = other.degree(),
            working,
            "fft multiply"
        );

        let lhs = fft(&pad(&self.coefficients, working)?)?;
        let rhs = fft(&pad(&other.coefficients, working)?)?;
        let product = pointwise_multiply(&lhs, &rhs);

        self.coefficients = ifft(&product)?;
        self.set_degree(result_degree);
        Ok(())
    }

    /// Square in place, with one forward transform instead of two.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Transform`] when the convolution length does
    /// not fit in `usize`.
    pub fn try_square_assign(&mut self) -> Result<(), PolyError> {
        if self.is_empty() {
            return Ok(());
        }

        let result_degree = 2 * self.degree() - 1;
        let working = convolution_length(self.degree(), self.degree())?;
        tracing::debug!(degree = self.degree(), working, "fft square");

        let mut values = fft(&pad(&self.coefficients, working)?)?;
        for value in &mut values {
            *value = *value * *value;
        }

        self.coefficients = ifft(&values)?;
        self.set_degree(result_degree);
        Ok(())
    }

    /// Return `self * other`.
    ///
    /// # Errors
    ///
    /// See [`try_mul_assign`](Self::try_mul_assign).
    pub fn try_mul(&self, other: &Self) -> Result<Self, PolyError> {
        let mut result = self.clone();
        result.try_mul_assign(other)?;
        Ok(result)
    }

    /// Return `self²`.
    ///
    /// # Panics
    ///
    /// Panics if the squared polynomial would not fit in memory.
    #[must_use]
    pub fn square(&self) -> Self {
        let mut result = self.clone();
        result
            .try_square_assign()
            .expect("convolution length exceeds usize");
        result
    }
}

/// Pointwise product of two transformed vectors of equal length.
#[must_use]
pub fn pointwise_multiply<T: Precision>(a: &[Complex<T>], b: &[Complex<T>]) -> Vec<Complex<T>> {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| *x * *y).collect()
}

impl<T: Precision> MulAssign<&Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, other: &Polynomial<T>) {
        self.try_mul_assign(other)
            .expect("convolution length exceeds usize");
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);

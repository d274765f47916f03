//! Integer powers by binary exponentiation.

use std::ops::{BitXor, BitXorAssign};

use polyfft_transform::Precision;

use crate::error::PolyError;
use crate::polynomial::Polynomial;

impl<T: Precision> Polynomial<T> {
    /// Raise to the power `exponent` in place.
    ///
    /// `p^0` is the constant `[1]` and `p^1` leaves `p` untouched. Even
    /// powers square the half power; odd powers multiply the previous power
    /// by a saved copy of the base. After each step the coefficient count
    /// is reset to the closed form `(degree - 1) * exponent + 1`, so the
    /// rounding of intermediate products never changes the final length.
    ///
    /// An empty polynomial stays empty for any positive exponent.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeOverflow`] when the result length does not
    /// fit in `usize`.
    pub fn try_pow_assign(&mut self, exponent: usize) -> Result<(), PolyError> {
        if exponent == 0 {
            *self = Self::one();
            return Ok(());
        }
        if exponent == 1 || self.is_empty() {
            return Ok(());
        }

        let degree = self.degree();
        let future_degree = (degree - 1)
            .checked_mul(exponent)
            .and_then(|d| d.checked_add(1))
            .ok_or(PolyError::DegreeOverflow { degree, exponent })?;

        if exponent % 2 == 0 {
            self.try_pow_assign(exponent / 2)?;
            self.try_square_assign()?;
        } else {
            let base = self.clone();
            self.try_pow_assign(exponent - 1)?;
            self.try_mul_assign(&base)?;
        }

        self.set_degree(future_degree);
        Ok(())
    }

    /// Return `self` raised to the power `exponent`.
    ///
    /// # Panics
    ///
    /// Panics if the result would not fit in memory.
    #[must_use]
    pub fn pow(&self, exponent: usize) -> Self {
        let mut result = self.clone();
        result ^= exponent;
        result
    }
}

impl<T: Precision> BitXorAssign<usize> for Polynomial<T> {
    fn bitxor_assign(&mut self, exponent: usize) {
        self.try_pow_assign(exponent)
            .expect("polynomial power exceeds addressable size");
    }
}

impl<T: Precision> BitXor<usize> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn bitxor(mut self, exponent: usize) -> Polynomial<T> {
        self ^= exponent;
        self
    }
}

impl<T: Precision> BitXor<usize> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn bitxor(self, exponent: usize) -> Polynomial<T> {
        self.pow(exponent)
    }
}

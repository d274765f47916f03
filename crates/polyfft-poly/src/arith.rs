//! Additive operators.
//!
//! Compound assignment mutates in place; the binary operators clone the
//! left operand and delegate to it.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use polyfft_transform::Precision;

use crate::polynomial::Polynomial;

impl<T: Precision> AddAssign<&Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, other: &Polynomial<T>) {
        if self.degree() < other.degree() {
            self.set_degree(other.degree());
        }
        for (lhs, rhs) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *lhs = *lhs + *rhs;
        }
    }
}

impl<T: Precision> SubAssign<&Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, other: &Polynomial<T>) {
        *self += &(-other);
    }
}

impl<T: Precision> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        self.coefficients.iter().map(|c| -*c).collect()
    }
}

impl<T: Precision> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(mut self) -> Polynomial<T> {
        for c in &mut self.coefficients {
            *c = -*c;
        }
        self
    }
}

/// Implement a binary operator for every owned/borrowed operand pairing
/// by delegating to the matching `OpAssign<&Polynomial<T>>`.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<T: Precision> $imp<&Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, other: &Polynomial<T>) -> Polynomial<T> {
                let mut result = self.clone();
                $assign::$assign_method(&mut result, other);
                result
            }
        }

        impl<T: Precision> $imp<&Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(mut self, other: &Polynomial<T>) -> Polynomial<T> {
                $assign::$assign_method(&mut self, other);
                self
            }
        }

        impl<T: Precision> $imp<Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, other: Polynomial<T>) -> Polynomial<T> {
                $imp::$method(self, &other)
            }
        }

        impl<T: Precision> $imp for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, other: Polynomial<T>) -> Polynomial<T> {
                $imp::$method(self, &other)
            }
        }

        impl<T: Precision> $assign for Polynomial<T> {
            fn $assign_method(&mut self, other: Polynomial<T>) {
                $assign::$assign_method(self, &other);
            }
        }
    };
}

pub(crate) use forward_binop;

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);

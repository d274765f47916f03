//! Complex scalar capability shared by every transform.
//!
//! All algorithms are written once over [`Precision`] and instantiated
//! at `f32` or `f64`. A single call never mixes precisions.

use std::fmt;

use num_traits::{Float, FloatConst};

pub use num_complex::{Complex, Complex32, Complex64};

/// Floating-point component type of a complex scalar.
///
/// Blanket-implemented for every float that supports the constants the
/// roots of unity need, which in practice means `f32` and `f64`.
pub trait Precision: Float + FloatConst + fmt::Debug + Send + Sync + 'static {}

impl<T> Precision for T where T: Float + FloatConst + fmt::Debug + Send + Sync + 'static {}

/// Convert a length into the float type.
///
/// Every `usize` is representable as a float (possibly rounded), so the
/// fallback is never taken for the precisions this crate instantiates.
#[must_use]
pub fn from_len<T: Precision>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::max_value)
}

/// Raise `base` to an index power.
///
/// Uses binary exponentiation when the exponent fits in `u32`, which is
/// always the case for transforms that fit in memory.
#[must_use]
pub fn pow_index<T: Precision>(base: Complex<T>, exp: usize) -> Complex<T> {
    match u32::try_from(exp) {
        Ok(e) => base.powu(e),
        Err(_) => base.powf(from_len(exp)),
    }
}

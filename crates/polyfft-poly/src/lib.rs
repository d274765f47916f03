//! # polyfft-poly
//!
//! Polynomials with complex coefficients, multiplied by fast convolution.
//!
//! The crate targets integer-coefficient workloads: equality and
//! formatting round real parts to the nearest integer.
//!
//! # Example
//! ```
//! use polyfft_poly::Polynomial;
//!
//! let p = Polynomial::<f64>::from_reals([1.0, 2.0, 3.0]);
//! let q = Polynomial::<f64>::from_reals([3.0, 2.0, 1.0]);
//! assert_eq!(&p * &q, Polynomial::from_reals([3.0, 8.0, 14.0, 8.0, 3.0]));
//! assert_eq!((p ^ 0).to_string(), "1");
//! ```

mod arith;
mod display;
pub mod error;
pub mod fft_mul;
pub mod polynomial;
pub mod pow;

// Re-exports
pub use error::PolyError;
pub use polynomial::Polynomial;

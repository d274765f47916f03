//! # polyfft-transform
//!
//! Discrete Fourier transforms over complex vectors.
//! Provides the quadratic reference transforms, zero padding, and the
//! recursive radix-2 transforms that polynomial multiplication runs on.

pub mod error;
pub mod fft_core;
pub mod naive;
pub mod padding;
pub mod roots;
pub mod scalar;

// Re-exports
pub use error::TransformError;
pub use fft_core::{fft, ifft};
pub use naive::{dft, idft};
pub use padding::{convolution_length, is_transform_length, pad};
pub use roots::{inverse_root_of_unity, root_of_unity, Direction};
pub use scalar::{Complex, Complex32, Complex64, Precision};

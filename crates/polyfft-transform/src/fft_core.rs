//! Core FFT transform: forward and inverse, recursive radix-2.
//!
//! Decimation in time. Each level splits its input into freshly owned
//! even- and odd-index halves, transforms both, and merges them with the
//! butterfly. The inverse halves every butterfly output, so the `1/n`
//! normalization is spread across the `log₂ n` levels.

use num_traits::{One, Zero};

use crate::error::TransformError;
use crate::padding::is_transform_length;
use crate::roots::Direction;
use crate::scalar::{Complex, Precision};

/// Forward FFT of a vector whose length is 1 or a power of two.
///
/// Agrees with [`dft`](crate::naive::dft) up to rounding.
///
/// # Errors
///
/// Returns [`TransformError::NotPowerOfTwo`] for any other length,
/// including 0. Callers pad first with [`pad`](crate::padding::pad).
pub fn fft<T: Precision>(data: &[Complex<T>]) -> Result<Vec<Complex<T>>, TransformError> {
    check_length(data.len())?;
    tracing::debug!(degree = data.len(), "fast forward transform");
    Ok(transform(data, Direction::Forward))
}

/// Inverse FFT of a vector whose length is 1 or a power of two.
///
/// Agrees with [`idft`](crate::naive::idft) up to rounding.
///
/// # Errors
///
/// Returns [`TransformError::NotPowerOfTwo`] for any other length.
pub fn ifft<T: Precision>(data: &[Complex<T>]) -> Result<Vec<Complex<T>>, TransformError> {
    check_length(data.len())?;
    tracing::debug!(degree = data.len(), "fast inverse transform");
    Ok(transform(data, Direction::Inverse))
}

fn check_length(n: usize) -> Result<(), TransformError> {
    if is_transform_length(n) {
        Ok(())
    } else {
        Err(TransformError::NotPowerOfTwo(n))
    }
}

/// Recursive kernel. `data.len()` is a power of two.
fn transform<T: Precision>(data: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    let degree = data.len();
    if degree == 1 {
        return data.to_vec();
    }

    let evens: Vec<Complex<T>> = data.iter().step_by(2).copied().collect();
    let odds: Vec<Complex<T>> = data.iter().skip(1).step_by(2).copied().collect();
    let even = transform(&evens, direction);
    let odd = transform(&odds, direction);

    let half = degree / 2;
    let root: Complex<T> = direction.root(degree);
    let two = T::one() + T::one();

    let mut result = vec![Complex::zero(); degree];
    let mut twiddle: Complex<T> = Complex::one();
    for i in 0..half {
        let t = twiddle * odd[i];
        let (lo, hi) = (even[i] + t, even[i] - t);
        match direction {
            Direction::Forward => {
                result[i] = lo;
                result[i + half] = hi;
            }
            Direction::Inverse => {
                result[i] = lo / two;
                result[i + half] = hi / two;
            }
        }
        twiddle = twiddle * root;
    }

    result
}

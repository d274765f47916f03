//! Quadratic reference transforms for vectors of any length.
//!
//! These are the ground truth the fast transforms are checked against.

use num_traits::{One, Zero};

use crate::error::TransformError;
use crate::roots::Direction;
use crate::scalar::{from_len, pow_index, Complex, Precision};

/// Forward DFT, `result[i] = Σ_j ω^{i·j} · data[j]`.
///
/// # Errors
///
/// Returns [`TransformError::ZeroDegree`] for an empty input.
pub fn dft<T: Precision>(data: &[Complex<T>]) -> Result<Vec<Complex<T>>, TransformError> {
    tracing::debug!(degree = data.len(), "naive forward transform");
    matrix_transform(data, Direction::Forward)
}

/// Inverse DFT. Every matrix entry is built from `ω⁻¹` and divided by `n`,
/// so `idft(dft(x))` recovers `x` up to rounding.
///
/// # Errors
///
/// Returns [`TransformError::ZeroDegree`] for an empty input.
pub fn idft<T: Precision>(data: &[Complex<T>]) -> Result<Vec<Complex<T>>, TransformError> {
    tracing::debug!(degree = data.len(), "naive inverse transform");
    matrix_transform(data, Direction::Inverse)
}

/// Multiply `data` by the transform matrix one row at a time.
///
/// Row `i` holds `1, r, r², …` with `r = root^i`. Entries past the second
/// are the previous entry times `r`, never a fresh power.
fn matrix_transform<T: Precision>(
    data: &[Complex<T>],
    direction: Direction,
) -> Result<Vec<Complex<T>>, TransformError> {
    let degree = data.len();
    if degree == 0 {
        return Err(TransformError::ZeroDegree);
    }

    let root: Complex<T> = direction.root(degree);
    let scale = match direction {
        Direction::Forward => None,
        Direction::Inverse => Some(from_len::<T>(degree)),
    };

    let mut row = vec![Complex::<T>::zero(); degree];
    let mut result = Vec::with_capacity(degree);
    for i in 0..degree {
        row[0] = Complex::one();
        if degree > 1 {
            row[1] = pow_index(root, i);
        }
        for j in 2..degree {
            row[j] = row[1] * row[j - 1];
        }
        if let Some(n) = scale {
            for entry in &mut row {
                *entry = *entry / n;
            }
        }

        let sum = row
            .iter()
            .zip(data)
            .fold(Complex::zero(), |acc, (w, x)| acc + *w * *x);
        result.push(sum);
    }

    Ok(result)
}

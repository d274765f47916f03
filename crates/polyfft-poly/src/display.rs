//! Human-readable rendering with rounded integer coefficients.

use std::fmt;

use polyfft_transform::Precision;

use crate::polynomial::Polynomial;

/// Renders terms lowest power first, e.g. `1 + 4x + 6x^2 + 4x^3 + x^4`.
///
/// Zero terms are skipped, a coefficient of `1` or `-1` is written as `x`
/// or `-x`, and the linear term has no exponent. An empty polynomial
/// renders as the empty string and an all-zero one as `0`.
impl<T: Precision> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded_coefficients();
        match rounded.as_slice() {
            [] => return Ok(()),
            [constant] => return write!(f, "{constant}"),
            _ => {}
        }

        let mut first = true;
        for (power, &coeff) in rounded.iter().enumerate() {
            if coeff == 0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            write_term(f, coeff, power)?;
        }

        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, coeff: i64, power: usize) -> fmt::Result {
    if power == 0 {
        return write!(f, "{coeff}");
    }
    match coeff {
        1 => {}
        -1 => f.write_str("-")?,
        _ => write!(f, "{coeff}")?,
    }
    f.write_str("x")?;
    if power != 1 {
        write!(f, "^{power}")?;
    }
    Ok(())
}

//! Property-based tests for polynomial arithmetic.
//!
//! Every FFT product is compared against schoolbook multiplication on small
//! integer coefficients, where rounding recovers the exact answer.

use proptest::prelude::*;

use polyfft_poly::Polynomial;

type P = Polynomial<f64>;

#[allow(clippy::cast_precision_loss)]
fn poly(values: &[i64]) -> P {
    P::from_reals(values.iter().map(|&v| v as f64))
}

fn schoolbook(a: &[i64], b: &[i64]) -> Vec<i64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

fn coeffs(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 1..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    /// FFT multiplication equals the schoolbook convolution.
    #[test]
    fn multiply_is_linear_convolution(a in coeffs(60), b in coeffs(60)) {
        let product = poly(&a) * poly(&b);
        prop_assert_eq!(product.degree(), a.len() + b.len() - 1);
        prop_assert_eq!(product.rounded_coefficients(), schoolbook(&a, &b));
    }

    /// Multiplication commutes.
    #[test]
    fn multiply_commutes(a in coeffs(30), b in coeffs(30)) {
        prop_assert_eq!(&poly(&a) * &poly(&b), &poly(&b) * &poly(&a));
    }

    /// (p^2) * (p^3) == p^5.
    #[test]
    fn powers_add_exponents(a in prop::collection::vec(-3i64..4, 1..5)) {
        let p = poly(&a);
        prop_assert_eq!(&(&p ^ 2) * &(&p ^ 3), &p ^ 5);
    }

    /// p^n equals n repeated multiplications.
    #[test]
    fn power_matches_repeated_multiplication(
        a in prop::collection::vec(-3i64..4, 1..5),
        n in 0usize..7,
    ) {
        let p = poly(&a);
        let mut expected = P::one();
        for _ in 0..n {
            expected *= &p;
        }
        prop_assert_eq!(&p ^ n, expected);
    }

    /// p + q - q == p.
    #[test]
    fn subtraction_undoes_addition(a in coeffs(30), b in coeffs(30)) {
        let p = poly(&a);
        let q = poly(&b);
        prop_assert_eq!(&(&p + &q) - &q, p);
    }

    /// Distributivity: p * (q + r) == p*q + p*r.
    #[test]
    fn multiply_distributes(a in coeffs(20), b in coeffs(20), c in coeffs(20)) {
        let (p, q, r) = (poly(&a), poly(&b), poly(&c));
        prop_assert_eq!(&p * &(&q + &r), &(&p * &q) + &(&p * &r));
    }
}

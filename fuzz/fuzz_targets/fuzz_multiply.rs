#![no_main]

use libfuzzer_sys::fuzz_target;

use polyfft_poly::Polynomial;

fn schoolbook(a: &[i64], b: &[i64]) -> Vec<i64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0i64; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte splits the rest into two operands of signed bytes
    let split = usize::from(data[0]) % data.len();
    let (lhs, rhs) = data[1..].split_at(split.min(data.len() - 1));
    let lhs: Vec<i64> = lhs.iter().map(|&b| i64::from(b as i8)).collect();
    let rhs: Vec<i64> = rhs.iter().map(|&b| i64::from(b as i8)).collect();

    let p = Polynomial::<f64>::from_reals(lhs.iter().map(|&c| c as f64));
    let q = Polynomial::<f64>::from_reals(rhs.iter().map(|&c| c as f64));
    let product = &p * &q;
    assert_eq!(product.rounded_coefficients(), schoolbook(&lhs, &rhs));
    assert_eq!(product, &q * &p);
});

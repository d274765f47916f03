#![no_main]

use libfuzzer_sys::fuzz_target;

use polyfft_transform::{dft, fft, idft, ifft, Complex64};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Largest power of two that fits, capped at 256 for the quadratic transform
    let n = 1usize << (data.len().min(256).ilog2());
    let input: Vec<Complex64> = data[..n]
        .iter()
        .map(|&b| Complex64::new(f64::from(b), 0.0))
        .collect();

    let fast = fft(&input).unwrap();
    let slow = dft(&input).unwrap();
    for (a, b) in fast.iter().zip(&slow) {
        assert!((a - b).norm() < 1e-6 * n as f64 * 256.0, "fft != dft at n={n}");
    }

    let back = ifft(&fast).unwrap();
    let back_slow = idft(&slow).unwrap();
    for ((x, y), z) in back.iter().zip(&back_slow).zip(&input) {
        assert!((x - z).norm() < 1e-6, "ifft roundtrip drifted at n={n}");
        assert!((y - z).norm() < 1e-6, "idft roundtrip drifted at n={n}");
    }
});

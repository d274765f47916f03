//! Criterion benchmarks for the naive and recursive transforms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use polyfft_transform::{dft, fft, Complex64};

#[allow(clippy::cast_precision_loss)]
fn ramp(n: usize) -> Vec<Complex64> {
    (0..n).map(|i| Complex64::new(i as f64, 0.0)).collect()
}

fn bench_transforms(c: &mut Criterion) {
    let sizes: Vec<usize> = vec![64, 256, 1024];

    let mut group = c.benchmark_group("NaiveDFT");
    for &n in &sizes {
        let data = ramp(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| dft(data).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("RecursiveFFT");
    for &n in &sizes {
        let data = ramp(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| fft(data).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);

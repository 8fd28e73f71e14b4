//! Criterion benchmarks for the conversion variants.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bm1pi_core::batch::BatchConverter;
use bm1pi_core::converter::{ForwardConverter, InverseConverter};
use bm1pi_core::inverse::ParityInverse;
use bm1pi_core::recurrence::RecurrenceConverter;
use bm1pi_core::scalar::ScalarConverter;
use bm1pi_core::{DigitString, GaussianInt};

fn bench_forward(c: &mut Criterion) {
    let variants: Vec<Arc<dyn ForwardConverter>> = vec![
        Arc::new(ScalarConverter::new()),
        Arc::new(BatchConverter::new()),
        Arc::new(RecurrenceConverter::new()),
    ];

    // Sparse low, dense, and top-digit-only inputs: the recurrence
    // variant's cost follows the highest set digit.
    let inputs: Vec<(&str, DigitString)> = vec![
        ("low8", DigitString::new(0xFF)),
        ("dense", DigitString::new(0x5555_5555_5555_5555_5555_5555_5555_5555)),
        ("full", DigitString::new(u128::MAX)),
        ("top", DigitString::new(1 << 127)),
    ];

    for conv in &variants {
        let mut group = c.benchmark_group(conv.name());
        for (label, digits) in &inputs {
            group.bench_with_input(BenchmarkId::from_parameter(label), digits, |b, &d| {
                b.iter(|| conv.to_gaussian(black_box(d)));
            });
        }
        group.finish();
    }
}

fn bench_inverse(c: &mut Criterion) {
    let inverse = ParityInverse::new();
    let values = [
        ("small", GaussianInt::new(3, 4)),
        ("medium", GaussianInt::new(12_345, -6_789)),
        ("full", bm1pi_core::to_gaussian(DigitString::new(u128::MAX))),
    ];

    let mut group = c.benchmark_group("ParityExtraction");
    for (label, value) in &values {
        group.bench_with_input(BenchmarkId::from_parameter(label), value, |b, &z| {
            b.iter(|| inverse.to_digits(black_box(z)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);

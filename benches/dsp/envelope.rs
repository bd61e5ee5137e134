//! Benchmarks for the ADSD envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use subtractive_dsp::envelope::Adsd;

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Attack and decay, retriggered every iteration
        let mut envelope = Adsd::new();
        envelope.set_parameters(size / 4, size / 2, 0.5, size).unwrap();
        group.bench_with_input(BenchmarkId::new("adsd", size), &size, |b, _| {
            b.iter(|| {
                envelope.trigger_on();
                envelope.render(black_box(&mut buffer));
            })
        });

        // Held at sustain
        let mut envelope = Adsd::new();
        envelope.trigger_on();
        group.bench_with_input(BenchmarkId::new("sustain", size), &size, |b, _| {
            b.iter(|| {
                envelope.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}

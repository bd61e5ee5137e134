//! Benchmarks for the filters, scalar against block path.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use subtractive_dsp::filter::biquad::Biquad;
use subtractive_dsp::filter::moog::MoogLadder;
use subtractive_dsp::filter::moog_low_alias::MoogLowAlias;
use subtractive_dsp::filter::moog_oversampled::MoogOversampled;
use subtractive_dsp::filter::oversampler::Oversampler;
use subtractive_dsp::filter::pole_zero::PoleZero;
use subtractive_dsp::filter::state_variable::{StateVariable, StateVariableOversampled};
use subtractive_dsp::filter::Filter;
use subtractive_dsp::{SampleRate, BLOCK_SIZE};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");
    let sr = SampleRate::new(SAMPLE_RATE).unwrap();

    let filters: Vec<(&str, Box<dyn Filter>)> = vec![
        ("pole_zero", Box::new(PoleZero::new(sr))),
        ("state_variable", Box::new(StateVariable::new(sr))),
        (
            "state_variable_oversampled",
            Box::new(StateVariableOversampled::new(sr)),
        ),
        ("biquad", Box::new(Biquad::new(sr))),
        ("oversampled_biquad", Box::new(Oversampler::new(Biquad::new(sr)))),
        ("moog", Box::new(MoogLadder::new(sr))),
        ("moog_low_alias", Box::new(MoogLowAlias::new(sr))),
        ("moog_oversampled", Box::new(MoogOversampled::new(sr))),
    ];

    for (name, mut filter) in filters {
        let resonance = filter.meta().res_passthrough;
        filter.set_cutoff_hz(1000.0, resonance).unwrap();

        for &size in BLOCK_SIZES {
            // Sawtooth-like ramp
            let input: Vec<f32> = (0..size)
                .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
                .collect();
            let mut buffer = input.clone();

            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    filter.process_buffer(black_box(&mut buffer));
                })
            });

            if filter.as_block_filter().is_some() {
                let id = format!("{name}_block");
                group.bench_with_input(BenchmarkId::new(id, size), &size, |b, _| {
                    b.iter(|| {
                        buffer.copy_from_slice(&input);
                        for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
                            let block = [chunk[0], chunk[1], chunk[2], chunk[3]];
                            if let Ok(out) = filter.try_process_block(black_box(block)) {
                                chunk.copy_from_slice(&out);
                            }
                        }
                    })
                });
            }
        }
    }

    group.finish();
}

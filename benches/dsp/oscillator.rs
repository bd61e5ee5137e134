//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use simple_logger::SimpleLogger;
use subtractive_dsp::oscillator::pulse_blit::PulseBlit;
use subtractive_dsp::oscillator::sawtooth_blit::SawtoothBlit;
use subtractive_dsp::oscillator::sawtooth_dpw::SawtoothDpw;
use subtractive_dsp::oscillator::sine::Sine;
use subtractive_dsp::oscillator::square_blit::SquareBlit;
use subtractive_dsp::oscillator::triangle_blit::TriangleBlit;
use subtractive_dsp::oscillator::triangle_dpw::TriangleDpw;
use subtractive_dsp::oscillator::Oscillator;
use subtractive_dsp::SampleRate;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    SimpleLogger::new().init().ok();
    let mut group = c.benchmark_group("dsp/oscillator");
    let sr = SampleRate::new(SAMPLE_RATE).unwrap();

    let oscillators: Vec<(&str, Box<dyn Oscillator>)> = vec![
        ("sawtooth_blit", Box::new(SawtoothBlit::new(sr).unwrap())),
        ("square_blit", Box::new(SquareBlit::new(sr).unwrap())),
        ("pulse_blit", Box::new(PulseBlit::new(sr).unwrap())),
        ("triangle_blit", Box::new(TriangleBlit::new(sr).unwrap())),
        ("sawtooth_dpw", Box::new(SawtoothDpw::new(sr))),
        ("triangle_dpw", Box::new(TriangleDpw::new(sr))),
        ("sine", Box::new(Sine::new(sr))),
    ];

    for (name, mut osc) in oscillators {
        osc.set_frequency(440.0).unwrap();

        for &size in BLOCK_SIZES {
            let mut buffer = vec![0.0f32; size];
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    osc.render(black_box(&mut buffer));
                })
            });
        }
    }

    group.finish();
}

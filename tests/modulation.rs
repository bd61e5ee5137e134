//! Modulation sources and test signals

// Shared by several test crates, each using a subset.
#![allow(dead_code)]

use oorandom::Rand32;

/// Returns a triangle wave in range -1.0..1.0
pub fn triangle(block_no: usize, block_count: usize, periods: f32) -> f32 {
    let phase = (block_no as f32 / block_count as f32 * periods).fract();

    if phase < 0.25 {
        phase * 4.0
    } else if phase < 0.5 {
        (0.5 - phase) * 4.0
    } else if phase < 0.75 {
        -(phase - 0.5) * 4.0
    } else {
        -(1.0 - phase) * 4.0
    }
}

/// Returns a ramp in range 0.0..1.0
pub fn ramp_up(block_no: usize, block_count: usize) -> f32 {
    block_no as f32 / block_count as f32
}

/// Exponential sweep from `start` to `end` over `block_count` blocks.
pub fn sweep(block_no: usize, block_count: usize, start: f32, end: f32) -> f32 {
    start * (end / start).powf(ramp_up(block_no, block_count))
}

/// Uniform white noise in range -1.0..1.0, identical for identical seeds.
pub fn noise(seed: u64, length: usize) -> Vec<f32> {
    let mut rng = Rand32::new(seed);
    (0..length)
        .map(|_| rng.rand_float() * 2.0 - 1.0)
        .collect()
}

/// Naive square wave in range -1.0..1.0 with `period` samples per cycle.
pub fn square(period: usize, length: usize) -> Vec<f32> {
    (0..length)
        .map(|n| if n % period < period / 2 { 1.0 } else { -1.0 })
        .collect()
}

/// Sine of a normalized frequency.
pub fn sine(frequency: f32, length: usize) -> Vec<f32> {
    (0..length)
        .map(|n| (2.0 * std::f32::consts::PI * frequency * n as f32).sin())
        .collect()
}

//! Band-limited triangle.
//!
//! The triangle is the absolute value of the ramp. Its discontinuities sit in the
//! derivative, so both corners are corrected with the integral segment of the table,
//! weighted by the normalized frequency.

use alloc::sync::Arc;

#[allow(unused_imports)]
use num_traits::float::Float;

use super::phase_accumulator::PhaseAccumulator;
use super::post_filter::PostFilter;
use super::Oscillator;
use crate::resources::{bandlimited_table, BandlimitedTable};
use crate::utils::increment_and_wrap;
use crate::{Result, SampleRate};

#[derive(Debug, Clone)]
pub struct TriangleBlit {
    accumulator: PhaseAccumulator,
    table: Arc<BandlimitedTable>,
    alpha: f32,
    gain: f32,
    post_filter: Option<PostFilter>,
}

impl TriangleBlit {
    pub fn new(sample_rate: SampleRate) -> Result<Self> {
        Self::with_post_filter(sample_rate, true)
    }

    pub fn with_post_filter(sample_rate: SampleRate, post_filter: bool) -> Result<Self> {
        Ok(Self {
            accumulator: PhaseAccumulator::new(sample_rate),
            table: bandlimited_table(sample_rate)?,
            alpha: 0.0,
            gain: 0.0,
            post_filter: post_filter.then(PostFilter::new),
        })
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.accumulator.phase()
    }
}

impl Oscillator for TriangleBlit {
    fn set_frequency(&mut self, frequency_hz: f32) -> Result<()> {
        self.accumulator.set_frequency(frequency_hz)
    }

    fn set_phase(&mut self, phase: f32) -> Result<()> {
        self.accumulator.set_phase(phase)?;
        if let Some(post_filter) = self.post_filter.as_mut() {
            post_filter.reset();
        }
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self) -> f32 {
        if let Some(increment) = self.accumulator.update() {
            self.alpha = 2.0 * increment;
            self.gain = increment;
        }
        let current = self.accumulator.process_sample();
        let shifted = increment_and_wrap(current, 1.0);
        let naive = 2.0 * current.abs() - 1.0;
        let out = naive - self.gain * self.table.integral_correction(current, self.alpha)
            + self.gain * self.table.integral_correction(shifted, self.alpha);

        match self.post_filter.as_mut() {
            Some(post_filter) => post_filter.process(out),
            None => out,
        }
    }
}

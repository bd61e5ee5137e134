//! Band-limited sawtooth.
//!
//! A half-period shifted ramp is corrected around its single discontinuity with the
//! sawtooth segment of the band-limited table. The correction spans
//! `alpha = 4 * f / fs` of phase on each side of the jump.

use alloc::sync::Arc;

use super::phase_accumulator::PhaseAccumulator;
use super::post_filter::PostFilter;
use super::Oscillator;
use crate::resources::{bandlimited_table, BandlimitedTable};
use crate::utils::increment_and_wrap;
use crate::{Result, SampleRate};

#[derive(Debug, Clone)]
pub struct SawtoothBlit {
    accumulator: PhaseAccumulator,
    table: Arc<BandlimitedTable>,
    alpha: f32,
    post_filter: Option<PostFilter>,
}

impl SawtoothBlit {
    /// Creates a sawtooth with the post filter enabled.
    pub fn new(sample_rate: SampleRate) -> Result<Self> {
        Self::with_post_filter(sample_rate, true)
    }

    pub fn with_post_filter(sample_rate: SampleRate, post_filter: bool) -> Result<Self> {
        Ok(Self::with_table(
            sample_rate,
            bandlimited_table(sample_rate)?,
            post_filter,
        ))
    }

    /// Creates a sawtooth reading from an already built table.
    pub fn with_table(
        sample_rate: SampleRate,
        table: Arc<BandlimitedTable>,
        post_filter: bool,
    ) -> Self {
        Self {
            accumulator: PhaseAccumulator::new(sample_rate),
            table,
            alpha: 0.0,
            post_filter: post_filter.then(PostFilter::new),
        }
    }

    /// Phase of the next sample.
    #[inline]
    pub fn phase(&self) -> f32 {
        self.accumulator.phase()
    }

    /// Uncorrected by the post filter.
    #[inline]
    pub(crate) fn process_raw(&mut self) -> f32 {
        if let Some(increment) = self.accumulator.update() {
            self.alpha = 2.0 * increment;
        }
        let current = self.accumulator.process_sample();
        let correction = self.table.step_correction(current, self.alpha);
        increment_and_wrap(current, 1.0) + correction
    }
}

impl Oscillator for SawtoothBlit {
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
        let out = self.process_raw();
        match self.post_filter.as_mut() {
            Some(post_filter) => post_filter.process(out),
            None => out,
        }
    }
}

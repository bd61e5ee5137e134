//! Lowpass filter family.
//!
//! Every filter implements [`Filter`]. Filters with a dedicated four sample path also
//! implement [`BlockFilter`], whose output is required to match four sequential
//! [`Filter::process_sample`] calls. The block path can be reached through a trait
//! object with [`Filter::try_process_block`], which fails with
//! [`Error::Unsupported`] on filters without one.
//!
//! Frequencies passed to [`Filter::set_parameters`] are normalized. The valid range
//! of each filter is described by its [`FilterMeta`], including the normalized
//! value matching Nyquist, which is always rejected.

pub mod biquad;
pub mod moog;
pub mod moog_low_alias;
pub mod moog_oversampled;
pub mod oversampler;
pub mod pole_zero;
pub mod state_variable;

use dyn_clone::DynClone;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Block, Error, Result, SampleRate};

/// Parameter ranges and output characteristics of a filter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterMeta {
    pub freq_min: f32,
    /// Highest accepted frequency, below `freq_nyquist`.
    pub freq_max: f32,
    /// Normalized frequency matching Nyquist.
    pub freq_nyquist: f32,
    /// Frequency at which the filter lets the input through. New filters start
    /// there, even when it lies at Nyquist and cannot be set afterwards.
    pub freq_passthrough: f32,
    pub res_min: f32,
    /// Resonance at which the filter lets the input through.
    pub res_passthrough: f32,
    pub res_max: f32,
    /// Delay of the passthrough output, in samples.
    pub output_delay: usize,
    /// Gain of the passthrough output.
    pub output_gain: f32,
}

impl FilterMeta {
    /// Checks parameters against the valid ranges.
    pub fn check(&self, frequency: f32, resonance: f32) -> Result<()> {
        if !(self.freq_min..=self.freq_max).contains(&frequency)
            || frequency >= self.freq_nyquist
        {
            return Err(Error::invalid_parameter(
                "frequency",
                frequency,
                self.freq_min,
                self.freq_max,
            ));
        }
        if !(self.res_min..=self.res_max).contains(&resonance) {
            return Err(Error::invalid_parameter(
                "resonance",
                resonance,
                self.res_min,
                self.res_max,
            ));
        }

        Ok(())
    }

    /// Converts a cutoff in Hz to this filter's normalized frequency.
    pub fn frequency_from_hz(&self, sample_rate: SampleRate, cutoff_hz: f32) -> f32 {
        sample_rate.normalize(cutoff_hz) * 2.0 * self.freq_nyquist
    }
}

/// Common interface of all filters.
pub trait Filter: DynClone {
    /// Sets normalized frequency and resonance (or Q, depending on the filter).
    ///
    /// Coefficients are updated right before the next sample is processed.
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()>;

    /// Filters one sample.
    fn process_sample(&mut self, input: f32) -> f32;

    /// Clears the history without touching the parameters.
    fn reset(&mut self);

    fn meta(&self) -> &'static FilterMeta;

    fn sample_rate(&self) -> SampleRate;

    /// Sets the cutoff in Hz.
    fn set_cutoff_hz(&mut self, cutoff_hz: f32, resonance: f32) -> Result<()> {
        let sample_rate = self.sample_rate();
        if !(cutoff_hz > 0.0 && cutoff_hz < sample_rate.nyquist()) {
            return Err(Error::invalid_parameter(
                "cutoff_hz",
                cutoff_hz,
                0.0,
                sample_rate.nyquist(),
            ));
        }
        let frequency = self.meta().frequency_from_hz(sample_rate, cutoff_hz);
        self.set_parameters(frequency.min(self.meta().freq_max), resonance)
    }

    /// Filters a buffer in place.
    fn process_buffer(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    /// Access to the block path, `None` for filters without one.
    fn as_block_filter(&mut self) -> Option<&mut dyn BlockFilter> {
        None
    }

    /// Filters four samples through the block path.
    fn try_process_block(&mut self, input: Block) -> Result<Block> {
        match self.as_block_filter() {
            Some(filter) => Ok(filter.process_block(input)),
            None => Err(Error::Unsupported("process_block")),
        }
    }
}

dyn_clone::clone_trait_object!(Filter);

/// Filters with a dedicated four sample path.
pub trait BlockFilter: Filter {
    /// Filters four samples, identical to four calls to `process_sample`.
    fn process_block(&mut self, input: Block) -> Block;
}

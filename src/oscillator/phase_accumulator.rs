//! Naive sawtooth generator by phase accumulation.
//!
//! The phase lives in [-1.0, 1.0) and advances by `2 * f / fs` per sample. The value
//! returned by [`process_sample`](Oscillator::process_sample) is the phase *before*
//! the increment is applied.

use super::Oscillator;
use crate::utils::deferred_parameter::DeferredParameter;
use crate::utils::{increment_and_wrap, wrap};
use crate::{Error, Result, SampleRate};

#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    sample_rate: SampleRate,
    frequency: DeferredParameter,
    increment: f32,
    phase: f32,
}

impl PhaseAccumulator {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            frequency: DeferredParameter::new(0.0),
            increment: 0.0,
            phase: 0.0,
        }
    }

    /// Applies a pending frequency change.
    ///
    /// Returns the new increment if one was applied.
    #[inline]
    pub fn update(&mut self) -> Option<f32> {
        let frequency = self.frequency.take()?;
        self.increment = 2.0 * frequency;
        Some(self.increment)
    }

    /// Current phase, i.e. the value the next call to `process_sample` returns.
    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Per-sample increment currently in use.
    ///
    /// A pending frequency change is not reflected until [`update`](Self::update)
    /// runs.
    #[inline]
    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Target frequency normalized to the sample rate.
    #[inline]
    pub fn frequency(&self) -> f32 {
        self.frequency.target()
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }
}

impl Oscillator for PhaseAccumulator {
    fn set_frequency(&mut self, frequency_hz: f32) -> Result<()> {
        let frequency = self.sample_rate.check_frequency(frequency_hz)?;
        self.frequency.set(frequency);
        Ok(())
    }

    fn set_phase(&mut self, phase: f32) -> Result<()> {
        if !(-1.0..=1.0).contains(&phase) {
            return Err(Error::invalid_parameter("phase", phase, -1.0, 1.0));
        }
        self.phase = wrap(phase);
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self) -> f32 {
        self.update();
        let out = self.phase;
        self.phase = increment_and_wrap(self.phase, self.increment);
        out
    }
}

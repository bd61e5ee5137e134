//! Sawtooth using the differentiated parabolic waveform (DPW) technique.
//!
//! The naive ramp is squared, differentiated and scaled by `fs / (4 * f)`.

use super::differentiator::Differentiator;
use super::phase_accumulator::PhaseAccumulator;
use super::Oscillator;
use crate::utils::decrement_and_wrap;
use crate::{Error, Result, SampleRate};

#[derive(Debug, Clone)]
pub struct SawtoothDpw {
    accumulator: PhaseAccumulator,
    differentiator: Differentiator,
    normalization: f32,
    reseed: bool,
}

impl SawtoothDpw {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            accumulator: PhaseAccumulator::new(sample_rate),
            differentiator: Differentiator::new(),
            normalization: 0.0,
            reseed: true,
        }
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.accumulator.phase()
    }

    #[inline]
    fn shape(phase: f32) -> f32 {
        phase * phase
    }
}

impl Oscillator for SawtoothDpw {
    fn set_frequency(&mut self, frequency_hz: f32) -> Result<()> {
        if frequency_hz <= 0.0 {
            let nyquist = self.accumulator.sample_rate().nyquist();
            return Err(Error::invalid_parameter(
                "frequency",
                frequency_hz,
                0.0,
                nyquist,
            ));
        }
        self.accumulator.set_frequency(frequency_hz)
    }

    fn set_phase(&mut self, phase: f32) -> Result<()> {
        self.accumulator.set_phase(phase)?;
        self.reseed = true;
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self) -> f32 {
        if let Some(increment) = self.accumulator.update() {
            if increment > 0.0 {
                self.normalization = 0.5 / increment;
            }
        }
        if self.reseed {
            let previous =
                decrement_and_wrap(self.accumulator.phase(), self.accumulator.increment());
            self.differentiator.set_history(Self::shape(previous));
            self.reseed = false;
        }
        let current = self.accumulator.process_sample();

        self.normalization * self.differentiator.process(Self::shape(current))
    }
}

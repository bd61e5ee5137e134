//! Triangle using the DPW technique.
//!
//! The ramp goes through `x - x * |x|`, whose derivative is the triangle, and is
//! scaled by `fs / (2 * f)`. The ramp is shifted so that the phase handed to
//! [`set_phase`](Oscillator::set_phase) is the value the triangle starts from, on
//! its falling slope.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::differentiator::Differentiator;
use super::phase_accumulator::PhaseAccumulator;
use super::Oscillator;
use crate::utils::decrement_and_wrap;
use crate::{Error, Result, SampleRate};

#[derive(Debug, Clone)]
pub struct TriangleDpw {
    accumulator: PhaseAccumulator,
    differentiator: Differentiator,
    normalization: f32,
    reseed: bool,
}

impl TriangleDpw {
    pub fn new(sample_rate: SampleRate) -> Self {
        let mut osc = Self {
            accumulator: PhaseAccumulator::new(sample_rate),
            differentiator: Differentiator::new(),
            normalization: 0.0,
            reseed: true,
        };
        osc.accumulator.set_phase(Self::ramp_phase(0.0)).ok();
        osc
    }

    #[inline]
    fn ramp_phase(phase: f32) -> f32 {
        phase * -0.5 + 0.5
    }

    #[inline]
    fn shape(phase: f32) -> f32 {
        phase - phase * phase.abs()
    }
}

impl Oscillator for TriangleDpw {
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
        if !(-1.0..=1.0).contains(&phase) {
            return Err(Error::invalid_parameter("phase", phase, -1.0, 1.0));
        }
        self.accumulator.set_phase(Self::ramp_phase(phase))?;
        self.reseed = true;
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self) -> f32 {
        if let Some(increment) = self.accumulator.update() {
            if increment > 0.0 {
                self.normalization = 1.0 / increment;
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

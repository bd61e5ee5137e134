//! Sine oscillator reading the cosine of the accumulated phase.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::phase_accumulator::PhaseAccumulator;
use super::Oscillator;
use crate::{Error, Result, SampleRate};

const PI_F: f32 = core::f32::consts::PI;

#[derive(Debug, Clone)]
pub struct Sine {
    accumulator: PhaseAccumulator,
}

impl Sine {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            accumulator: PhaseAccumulator::new(sample_rate),
        }
    }
}

impl Oscillator for Sine {
    fn set_frequency(&mut self, frequency_hz: f32) -> Result<()> {
        self.accumulator.set_frequency(frequency_hz)
    }

    /// Seeds the oscillator so that the next output equals `phase`.
    fn set_phase(&mut self, phase: f32) -> Result<()> {
        if !(-1.0..=1.0).contains(&phase) {
            return Err(Error::invalid_parameter("phase", phase, -1.0, 1.0));
        }
        self.accumulator.set_phase((phase.acos() / PI_F).min(1.0))
    }

    #[inline]
    fn process_sample(&mut self) -> f32 {
        (PI_F * self.accumulator.process_sample()).cos()
    }
}

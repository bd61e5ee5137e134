//! 2x oversampled low-alias Moog ladder.
//!
//! The ladder runs twice per input sample. The decimated output is a 4-tap FIR over
//! the two new and the two previous 2x-rate samples, followed by the one-pole
//! correction `y = fir - 0.52 * y[n-1]`. The FIR has a DC gain of 1.52, which the
//! correction divides back out.

use super::moog_low_alias::{MoogLowAlias, MOOG_LOW_ALIAS_META};
use super::{Filter, FilterMeta};
use crate::{Result, SampleRate};

const FIR: [f32; 4] = [0.19, 0.57, 0.57, 0.19];
const CORRECTION: f32 = -0.52;

#[derive(Debug, Clone)]
pub struct MoogOversampled {
    ladder: MoogLowAlias,
    // Previous pair of 2x-rate samples, oldest first.
    history: [f32; 2],
    last: f32,
}

impl MoogOversampled {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            ladder: MoogLowAlias::new(sample_rate),
            history: [0.0; 2],
            last: 0.0,
        }
    }
}

impl Filter for MoogOversampled {
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()> {
        self.ladder.set_parameters(frequency, resonance)
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        let first = self.ladder.process_sample(input);
        let second = self.ladder.process_sample(input);
        let [older, newer] = self.history;

        let fir = FIR[0] * older + FIR[1] * newer + FIR[2] * first + FIR[3] * second;
        self.history = [first, second];
        self.last = fir + CORRECTION * self.last;
        self.last
    }

    fn reset(&mut self) {
        self.ladder.reset();
        self.history = [0.0; 2];
        self.last = 0.0;
    }

    fn meta(&self) -> &'static FilterMeta {
        &MOOG_LOW_ALIAS_META
    }

    fn sample_rate(&self) -> SampleRate {
        self.ladder.sample_rate()
    }
}

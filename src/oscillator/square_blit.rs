//! Band-limited square, the difference of two sawtooths half a period apart.

use super::post_filter::PostFilter;
use super::sawtooth_blit::SawtoothBlit;
use super::Oscillator;
use crate::resources::bandlimited_table;
use crate::utils::{increment_and_wrap, wrap};
use crate::{Error, Result, SampleRate};

/// Phase distance between both sawtooths.
const OFFSET: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct SquareBlit {
    leading: SawtoothBlit,
    trailing: SawtoothBlit,
    post_filter: Option<PostFilter>,
}

impl SquareBlit {
    pub fn new(sample_rate: SampleRate) -> Result<Self> {
        Self::with_post_filter(sample_rate, true)
    }

    pub fn with_post_filter(sample_rate: SampleRate, post_filter: bool) -> Result<Self> {
        let table = bandlimited_table(sample_rate)?;
        let mut osc = Self {
            leading: SawtoothBlit::with_table(sample_rate, table.clone(), false),
            trailing: SawtoothBlit::with_table(sample_rate, table, false),
            post_filter: post_filter.then(PostFilter::new),
        };
        osc.set_phase(0.0)?;
        Ok(osc)
    }

    /// Phase of the leading sawtooth.
    #[inline]
    pub fn phase(&self) -> f32 {
        self.leading.phase()
    }
}

impl Oscillator for SquareBlit {
    fn set_frequency(&mut self, frequency_hz: f32) -> Result<()> {
        self.leading.set_frequency(frequency_hz)?;
        self.trailing.set_frequency(frequency_hz)
    }

    fn set_phase(&mut self, phase: f32) -> Result<()> {
        if !(-1.0..=1.0).contains(&phase) {
            return Err(Error::invalid_parameter("phase", phase, -1.0, 1.0));
        }
        let phase = wrap(phase);
        self.leading.set_phase(phase)?;
        self.trailing.set_phase(increment_and_wrap(phase, OFFSET))?;
        if let Some(post_filter) = self.post_filter.as_mut() {
            post_filter.reset();
        }
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self) -> f32 {
        let out = self.leading.process_raw() - self.trailing.process_raw();
        match self.post_filter.as_mut() {
            Some(post_filter) => post_filter.process(out),
            None => out,
        }
    }
}

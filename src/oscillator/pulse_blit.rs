//! Band-limited pulse with variable width.
//!
//! Same construction as the square, with the second sawtooth offset by twice the
//! duty cycle. Changing the width resynchronizes the second sawtooth to the current
//! phase of the first one, so the width survives frequency changes.

use super::post_filter::PostFilter;
use super::sawtooth_blit::SawtoothBlit;
use super::Oscillator;
use crate::resources::bandlimited_table;
use crate::utils::{increment_and_wrap, wrap};
use crate::{Error, Result, SampleRate};

#[derive(Debug, Clone)]
pub struct PulseBlit {
    leading: SawtoothBlit,
    trailing: SawtoothBlit,
    width: f32,
    post_filter: Option<PostFilter>,
}

impl PulseBlit {
    pub fn new(sample_rate: SampleRate) -> Result<Self> {
        Self::with_post_filter(sample_rate, true)
    }

    pub fn with_post_filter(sample_rate: SampleRate, post_filter: bool) -> Result<Self> {
        let table = bandlimited_table(sample_rate)?;
        let mut osc = Self {
            leading: SawtoothBlit::with_table(sample_rate, table.clone(), false),
            trailing: SawtoothBlit::with_table(sample_rate, table, false),
            width: 0.5,
            post_filter: post_filter.then(PostFilter::new),
        };
        osc.set_phase(0.0)?;
        Ok(osc)
    }

    /// Sets the duty cycle, exclusive range (0.0, 1.0).
    pub fn set_pulse_width(&mut self, width: f32) -> Result<()> {
        if !(width > 0.0 && width < 1.0) {
            return Err(Error::invalid_parameter("pulse_width", width, 0.0, 1.0));
        }
        self.width = width;
        self.trailing
            .set_phase(increment_and_wrap(self.leading.phase(), 2.0 * width))
    }

    #[inline]
    pub fn pulse_width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.leading.phase()
    }
}

impl Oscillator for PulseBlit {
    fn set_frequency(&mut self, frequency_hz: f32) -> Result<()> {
        self.leading.set_frequency(frequency_hz)?;
        self.trailing.set_frequency(frequency_hz)
    }

    fn set_phase(&mut self, phase: f32) -> Result<()> {
        if !(-1.0..=1.0).contains(&phase) {
            return Err(Error::invalid_parameter("phase", phase, -1.0, 1.0));
        }
        self.leading.set_phase(wrap(phase))?;
        self.set_pulse_width(self.width)?;
        if let Some(post_filter) = self.post_filter.as_mut() {
            post_filter.reset();
        }
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self) -> f32 {
        let out = 0.5 * (self.leading.process_raw() - self.trailing.process_raw());
        match self.post_filter.as_mut() {
            Some(post_filter) => post_filter.process(out),
            None => out,
        }
    }
}

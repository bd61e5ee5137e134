//! Collection of oscillators.
//!
//! Two antialiasing families are provided:
//! - BLIT: a naive waveform corrected near each discontinuity with values read
//!   from a [`BandlimitedTable`](crate::resources::BandlimitedTable).
//! - DPW: a polynomial of the naive ramp, differentiated and renormalized.
//!
//! All oscillators output values in [-1.0, 1.0] and are driven by a
//! [`PhaseAccumulator`](phase_accumulator::PhaseAccumulator).

pub mod differentiator;
pub mod phase_accumulator;
pub mod post_filter;
pub mod pulse_blit;
pub mod sawtooth_blit;
pub mod sawtooth_dpw;
pub mod sine;
pub mod square_blit;
pub mod triangle_blit;
pub mod triangle_dpw;

use crate::{Block, Result};

/// Common interface of all generators.
pub trait Oscillator {
    /// Sets the frequency in Hz.
    ///
    /// The change is applied right before the next sample is computed.
    fn set_frequency(&mut self, frequency_hz: f32) -> Result<()>;

    /// Reseeds the phase, in [-1.0, 1.0].
    fn set_phase(&mut self, phase: f32) -> Result<()>;

    /// Computes the next sample.
    fn process_sample(&mut self) -> f32;

    /// Computes the next four samples.
    #[inline]
    fn process_block(&mut self) -> Block {
        core::array::from_fn(|_| self.process_sample())
    }

    /// Fills a buffer with consecutive samples.
    #[inline]
    fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.process_sample();
        }
    }
}

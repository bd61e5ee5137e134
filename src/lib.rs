#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod envelope;
pub mod error;
pub mod filter;
pub mod oscillator;
pub mod resources;
pub mod utils;

pub use error::{Error, Result};

/// Number of samples handled by the block processing paths.
pub const BLOCK_SIZE: usize = 4;

/// Fixed-size block of samples.
pub type Block = [f32; BLOCK_SIZE];

/// Sample rate context for DSP calculations.
///
/// Every generator and filter receives one at construction and keeps it for its
/// whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRate {
    /// Sample rate in Hz
    sample_rate_hz: f32,
    /// Reciprocal of sample rate (1.0 / sample_rate_hz) for fast multiplication
    inv_sr: f32,
}

impl SampleRate {
    /// Create a new sample rate context.
    ///
    /// Fails for zero, negative or non-finite rates.
    pub fn new(sample_rate_hz: f32) -> Result<Self> {
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            log::debug!("Rejected sample rate {sample_rate_hz} Hz");
            return Err(Error::InvalidSampleRate(sample_rate_hz));
        }

        Ok(Self {
            sample_rate_hz,
            inv_sr: 1.0 / sample_rate_hz,
        })
    }

    /// Sample rate in Hz.
    #[inline]
    pub fn hz(&self) -> f32 {
        self.sample_rate_hz
    }

    /// Reciprocal of the sample rate.
    #[inline]
    pub fn inv(&self) -> f32 {
        self.inv_sr
    }

    /// Half the sample rate in Hz.
    #[inline]
    pub fn nyquist(&self) -> f32 {
        self.sample_rate_hz * 0.5
    }

    /// Converts a frequency in Hz to a fraction of the sample rate.
    #[inline]
    pub fn normalize(&self, frequency_hz: f32) -> f32 {
        frequency_hz * self.inv_sr
    }

    /// Validates a frequency in Hz against `0 <= frequency < nyquist` and
    /// returns it normalized to the sample rate.
    pub fn check_frequency(&self, frequency_hz: f32) -> Result<f32> {
        if !(0.0..self.nyquist()).contains(&frequency_hz) {
            return Err(Error::invalid_parameter(
                "frequency",
                frequency_hz,
                0.0,
                self.nyquist(),
            ));
        }

        Ok(self.normalize(frequency_hz))
    }
}

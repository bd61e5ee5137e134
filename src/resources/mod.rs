//! Band-limited correction tables.
//!
//! A table holds one half of a windowed-sinc band-limited step (the sawtooth
//! segment) and its running integral (the triangle segment). Only the left half is
//! stored, the right half follows by sign mirroring.
//!
//! Tables depend on the sample rate through the impulse cutoff. They are built off
//! the audio path: the common sample rates are built once on first use and shared,
//! other rates get a private table when an oscillator is constructed.

use alloc::sync::Arc;
use alloc::vec::Vec;

#[allow(unused_imports)]
use num_traits::float::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use spin::Once;

use crate::utils::window::kaiser;
use crate::{Error, Result, SampleRate};

/// Offset keeping the sinc argument away from zero.
const SINC_EPSILON: f64 = 1e-7;

/// Highest cutoff used by [`TableConfig::for_sample_rate`], relative to the sample rate.
const MAX_CUTOFF_RATIO: f64 = 15000.0 / 48000.0;

static TABLE_44100: Once<Arc<BandlimitedTable>> = Once::new();
static TABLE_48000: Once<Arc<BandlimitedTable>> = Once::new();
static TABLE_96000: Once<Arc<BandlimitedTable>> = Once::new();

/// Parameters of the windowed-sinc impulse the tables are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableConfig {
    /// Cutoff of the brick-wall impulse in Hz.
    pub cutoff_hz: f64,
    /// Impulse length in periods.
    pub length: usize,
    /// Points computed per period.
    pub points_per_period: usize,
    /// Kaiser window beta.
    pub beta: f64,
    /// Attenuation applied by the apodization window.
    pub apodization_factor: f64,
    /// Kaiser beta of the apodization window.
    pub apodization_beta: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            cutoff_hz: 15000.0,
            length: 4,
            points_per_period: 2700,
            beta: 8.3,
            apodization_factor: 0.5,
            apodization_beta: 0.5,
        }
    }
}

impl TableConfig {
    /// Default configuration, with the cutoff lowered for rates where 15 kHz would
    /// not leave enough room below Nyquist.
    pub fn for_sample_rate(sample_rate: SampleRate) -> Self {
        let default = Self::default();
        let limit = MAX_CUTOFF_RATIO * sample_rate.hz() as f64;
        Self {
            cutoff_hz: default.cutoff_hz.min(limit),
            ..default
        }
    }

    fn validate(&self, sample_rate: SampleRate) -> Result<()> {
        let nyquist = sample_rate.nyquist() as f64;
        if !(self.cutoff_hz > 0.0 && self.cutoff_hz < nyquist) {
            return Err(Error::invalid_parameter(
                "cutoff_hz",
                self.cutoff_hz as f32,
                0.0,
                nyquist as f32,
            ));
        }
        if self.length == 0 || self.points_per_period < 2 {
            return Err(Error::invalid_parameter(
                "points",
                (self.length * self.points_per_period) as f32,
                4.0,
                f32::MAX,
            ));
        }
        if !(0.0..1.0).contains(&self.apodization_factor) {
            return Err(Error::invalid_parameter(
                "apodization_factor",
                self.apodization_factor as f32,
                0.0,
                1.0,
            ));
        }

        Ok(())
    }
}

/// Precomputed half segments of a band-limited sawtooth and of its integral.
#[derive(Debug, Clone)]
pub struct BandlimitedTable {
    sawtooth: Vec<f32>,
    integral: Vec<f32>,
}

impl BandlimitedTable {
    /// Builds the tables from the given configuration.
    ///
    /// Computation runs in double precision; only the stored segments are `f32`.
    pub fn build(sample_rate: SampleRate, config: &TableConfig) -> Result<Self> {
        config.validate(sample_rate)?;

        let impulse = Self::impulse(config, sample_rate.hz() as f64);
        let points = impulse.len();

        // Cumulative sum normalized to span [-1.0, 1.0), then the redundant half is
        // dropped and the boundary renormalized to exactly 1.0.
        let mut step = Vec::with_capacity(points);
        let mut acc = 0.0;
        for value in impulse.iter() {
            acc += value;
            step.push(acc);
        }
        let total = step[points - 1];
        for (i, value) in step.iter_mut().enumerate() {
            *value = 2.0 * *value / total;
            if i >= points / 2 {
                *value -= 2.0;
            }
        }
        let peak = step.iter().cloned().fold(f64::MIN, f64::max);
        step.truncate(points / 2);
        for value in step.iter_mut() {
            *value /= peak;
        }

        let mut integral = Vec::with_capacity(step.len());
        let mut acc = 0.0;
        for value in step.iter() {
            acc += value;
            integral.push(acc);
        }
        let peak = integral.iter().cloned().fold(f64::MIN, f64::max);

        Ok(Self {
            sawtooth: step.iter().map(|v| *v as f32).collect(),
            integral: integral.iter().map(|v| (*v / peak) as f32).collect(),
        })
    }

    /// Windowed and apodized sinc impulse.
    fn impulse(config: &TableConfig, sample_rate_hz: f64) -> Vec<f64> {
        let points = config.length * config.points_per_period;
        let span = points as f64;
        let step = span / (span - 1.0);
        let attenuation = 1.0 - config.apodization_factor;
        let cutoff = config.cutoff_hz / sample_rate_hz;

        (0..points)
            .map(|n| {
                let x = n as f64 * step;
                let t = config.length as f64 * 2.0 * (x - span / 2.0 + SINC_EPSILON) / span;
                let arg = core::f64::consts::PI * cutoff * t;
                let sinc = arg.sin() / arg;
                sinc * kaiser(n, points, config.beta)
                    * attenuation
                    * kaiser(n, points, config.apodization_beta)
            })
            .collect()
    }

    /// Number of stored points in each half segment.
    #[inline]
    pub fn len(&self) -> usize {
        self.sawtooth.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sawtooth.is_empty()
    }

    pub fn sawtooth(&self) -> &[f32] {
        &self.sawtooth
    }

    pub fn integral(&self) -> &[f32] {
        &self.integral
    }

    /// Sawtooth correction for a phase `distance` from the discontinuity.
    ///
    /// Returns 0.0 outside of `(-alpha, alpha)`. Phase 0.0 belongs to the positive
    /// side.
    #[inline]
    pub fn step_correction(&self, distance: f32, alpha: f32) -> f32 {
        let abs = distance.abs();
        if abs >= alpha {
            return 0.0;
        }
        let half = self.sawtooth.len() as f32;
        let index = (half - half * abs / alpha - 1.0).max(0.0) as usize;
        let value = self.sawtooth[index.min(self.sawtooth.len() - 1)];

        if distance >= 0.0 {
            value
        } else {
            -value
        }
    }

    /// Triangle correction read from the integral segment.
    ///
    /// Indices past the middle of the segment are folded back.
    #[inline]
    pub fn integral_correction(&self, distance: f32, alpha: f32) -> f32 {
        let abs = distance.abs();
        if abs >= alpha {
            return 0.0;
        }
        let len = self.integral.len();
        let relative = ((len as f32 * abs / alpha).round() as usize).min(len);
        let index = (len - relative).min(len - 1);

        if index > len / 2 {
            self.integral[len - index]
        } else {
            self.integral[index]
        }
    }
}

/// Returns the table for a sample rate, building it if needed.
///
/// 44.1, 48 and 96 kHz tables are built once and shared between all callers.
pub fn bandlimited_table(sample_rate: SampleRate) -> Result<Arc<BandlimitedTable>> {
    let cache = match sample_rate.hz() as u32 {
        44100 => Some(&TABLE_44100),
        48000 => Some(&TABLE_48000),
        96000 => Some(&TABLE_96000),
        _ => None,
    };

    match cache {
        Some(cell) if sample_rate.hz().fract() == 0.0 => {
            if let Some(table) = cell.get() {
                return Ok(table.clone());
            }
            let config = TableConfig::for_sample_rate(sample_rate);
            let table = Arc::new(BandlimitedTable::build(sample_rate, &config)?);
            log::debug!(
                "Built band-limited table for {} Hz ({} points)",
                sample_rate.hz(),
                table.len()
            );
            Ok(cell.call_once(|| table).clone())
        }
        _ => {
            log::warn!(
                "No cached band-limited table for {} Hz, building a private one",
                sample_rate.hz()
            );
            let config = TableConfig::for_sample_rate(sample_rate);
            Ok(Arc::new(BandlimitedTable::build(sample_rate, &config)?))
        }
    }
}

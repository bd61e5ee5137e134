//! One-pole one-zero lowpass filters.
//!
//! Both filters share the recursion
//!
//! ```text
//! direct = p / (1 + z) * x
//! y      = direct + s
//! s      = y * (1 - p) + z * direct
//! ```
//!
//! which has unit gain at DC. [`PoleZero`] places the zero at Nyquist (`z = 1`) and
//! derives `p` from the cutoff. [`FixedZeroLowPass`] takes `p` directly and a zero
//! coefficient chosen at construction; it is the building block of the Moog ladders.
//! Its uncompensated form drops the `1 / (1 + z)` factor and has a DC gain of `1 + z`.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::{BlockFilter, Filter, FilterMeta};
use crate::utils::deferred_parameter::DeferredParameter;
use crate::{Block, Result, SampleRate};

/// Zero used by the ladder stages.
pub const LADDER_ZERO: f32 = 0.3;

static POLE_ZERO_META: FilterMeta = FilterMeta {
    freq_min: 1e-5,
    freq_max: 0.4999,
    freq_nyquist: 0.5,
    freq_passthrough: 0.5,
    res_min: 0.0,
    res_passthrough: 1.0,
    res_max: 1.0,
    output_delay: 0,
    output_gain: 1.0,
};

const FIXED_ZERO_META: FilterMeta = FilterMeta {
    freq_min: 1e-5,
    freq_max: 1.0 + LADDER_ZERO,
    freq_nyquist: 1.31,
    freq_passthrough: 1.0 + LADDER_ZERO,
    res_min: 0.0,
    res_passthrough: 0.0,
    res_max: 3.9999,
    output_delay: 0,
    output_gain: 1.0,
};

static FIXED_ZERO_UNCOMPENSATED_META: FilterMeta = FilterMeta {
    output_gain: 1.0 + LADDER_ZERO,
    ..FIXED_ZERO_META
};

#[derive(Debug, Default, Clone, Copy)]
struct Section {
    pole: f32,
    zero: f32,
    // Input gain per unit of pole coefficient.
    scale: f32,
    gain: f32,
    state: f32,
}

impl Section {
    fn new(zero: f32) -> Self {
        Self {
            zero,
            scale: 1.0 / (1.0 + zero),
            ..Default::default()
        }
    }

    fn uncompensated(zero: f32) -> Self {
        Self {
            zero,
            scale: 1.0,
            ..Default::default()
        }
    }

    #[inline]
    fn set_pole(&mut self, pole: f32) {
        self.pole = pole;
        self.gain = pole * self.scale;
    }

    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let direct = self.gain * input;
        let out = direct + self.state;
        self.state = out * (1.0 - self.pole) + self.zero * direct;
        out
    }

    #[inline]
    fn process_block(&mut self, input: Block) -> Block {
        let gain = self.gain;
        let feedback = 1.0 - self.pole;
        let zero = self.zero;

        let d0 = gain * input[0];
        let y0 = d0 + self.state;
        let s0 = y0 * feedback + zero * d0;
        let d1 = gain * input[1];
        let y1 = d1 + s0;
        let s1 = y1 * feedback + zero * d1;
        let d2 = gain * input[2];
        let y2 = d2 + s1;
        let s2 = y2 * feedback + zero * d2;
        let d3 = gain * input[3];
        let y3 = d3 + s2;
        self.state = y3 * feedback + zero * d3;

        [y0, y1, y2, y3]
    }
}

/// First order lowpass with its zero at Nyquist.
///
/// Frequency is normalized to the sample rate, resonance is ignored.
#[derive(Debug, Clone)]
pub struct PoleZero {
    sample_rate: SampleRate,
    frequency: DeferredParameter,
    section: Section,
}

impl PoleZero {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            frequency: DeferredParameter::new(POLE_ZERO_META.freq_passthrough),
            section: Section::new(1.0),
        }
    }

    /// Pole coefficient for a normalized frequency.
    pub fn coefficient(frequency: f32) -> f32 {
        let (sin, cos) = (core::f64::consts::PI * frequency as f64).sin_cos();
        (2.0 * sin / (cos + sin)) as f32
    }

    #[inline]
    fn update(&mut self) {
        if let Some(frequency) = self.frequency.take() {
            self.section.set_pole(Self::coefficient(frequency));
        }
    }
}

impl Filter for PoleZero {
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()> {
        POLE_ZERO_META.check(frequency, resonance)?;
        self.frequency.set(frequency);
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        self.update();
        self.section.process(input)
    }

    fn reset(&mut self) {
        self.section.state = 0.0;
    }

    fn meta(&self) -> &'static FilterMeta {
        &POLE_ZERO_META
    }

    fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    fn as_block_filter(&mut self) -> Option<&mut dyn BlockFilter> {
        Some(self)
    }
}

impl BlockFilter for PoleZero {
    #[inline]
    fn process_block(&mut self, input: Block) -> Block {
        self.update();
        self.section.process_block(input)
    }
}

/// First order lowpass with a zero fixed at construction.
///
/// The frequency parameter is the pole coefficient itself, valid up to `1 + zero`
/// where the filter becomes transparent. Changes apply immediately.
#[derive(Debug, Clone)]
pub struct FixedZeroLowPass {
    sample_rate: SampleRate,
    meta: &'static FilterMeta,
    section: Section,
}

impl FixedZeroLowPass {
    /// Creates a stage with the ladder zero.
    pub fn new(sample_rate: SampleRate) -> Self {
        Self::with_zero(sample_rate, LADDER_ZERO)
    }

    pub fn with_zero(sample_rate: SampleRate, zero: f32) -> Self {
        Self::with_section(sample_rate, &FIXED_ZERO_META, Section::new(zero))
    }

    /// Creates a ladder stage with a DC gain of `1 + zero`.
    pub fn uncompensated(sample_rate: SampleRate) -> Self {
        Self::with_section(
            sample_rate,
            &FIXED_ZERO_UNCOMPENSATED_META,
            Section::uncompensated(LADDER_ZERO),
        )
    }

    fn with_section(
        sample_rate: SampleRate,
        meta: &'static FilterMeta,
        mut section: Section,
    ) -> Self {
        section.set_pole(1.0 + section.zero);
        Self {
            sample_rate,
            meta,
            section,
        }
    }

    /// Sets the pole coefficient without range checks.
    #[inline]
    pub(crate) fn set_pole(&mut self, pole: f32) {
        self.section.set_pole(pole);
    }

    #[inline]
    pub fn zero(&self) -> f32 {
        self.section.zero
    }
}

impl Filter for FixedZeroLowPass {
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()> {
        self.meta.check(frequency, resonance)?;
        self.section.set_pole(frequency);
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        self.section.process(input)
    }

    fn reset(&mut self) {
        self.section.state = 0.0;
    }

    fn meta(&self) -> &'static FilterMeta {
        self.meta
    }

    fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    fn as_block_filter(&mut self) -> Option<&mut dyn BlockFilter> {
        Some(self)
    }
}

impl BlockFilter for FixedZeroLowPass {
    #[inline]
    fn process_block(&mut self, input: Block) -> Block {
        self.section.process_block(input)
    }
}

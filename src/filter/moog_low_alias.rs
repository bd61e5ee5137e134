//! Moog ladder with reduced aliasing from its nonlinearity.
//!
//! Same clipper and stage layout as [`MoogLadder`](super::moog::MoogLadder), with
//! four differences:
//! - its own polynomial fit, expressed on `r / 4`,
//! - uncompensated stages with a DC gain of 1.3 each, so the loop gain reaches 4 with
//!   a fitted feedback of about 1.4,
//! - the input is scaled by `0.18 + 0.25 * R`,
//! - a smoothed "side" level, built from the squared loop input, attenuates the loop
//!   input by `1 - s + s^2 / 2` before it enters the stages.
//!
//! Without resonance the DC gain is `0.18 * 1.3^4`.

use super::pole_zero::FixedZeroLowPass;
use super::{Filter, FilterMeta};
use crate::utils::deferred_parameter::DeferredParameter;
use crate::utils::{cubic_clip, saturate};
use crate::{Result, SampleRate};

pub(crate) static MOOG_LOW_ALIAS_META: FilterMeta = FilterMeta {
    freq_min: 1e-5,
    freq_max: 0.9999,
    freq_nyquist: 1.0,
    freq_passthrough: 1.0,
    res_min: 0.0,
    res_passthrough: 0.0,
    res_max: 3.9999,
    output_delay: 0,
    output_gain: 0.514_098,
};

/// Corrected stage pole and loop resonance.
pub fn tuning(frequency: f32, resonance: f32) -> (f32, f32) {
    let quarter = resonance / 4.0;
    let spread = 1.0 - quarter;
    let tuned = frequency * (1.0 + 0.5787 * frequency * spread * spread);
    let pole = 1.25 * tuned * (1.0 - 0.595 * tuned + 0.24 * tuned * tuned);
    let pole2 = pole * pole;
    let feedback = quarter * (1.4 + 0.108 * pole - 0.164 * pole2 - 0.069 * pole2 * pole);

    (pole, feedback)
}

#[derive(Debug, Clone)]
pub struct MoogLowAlias {
    sample_rate: SampleRate,
    parameters: DeferredParameter<(f32, f32)>,
    stages: [FixedZeroLowPass; 4],
    resonance: f32,
    side: f32,
    last: f32,
}

impl MoogLowAlias {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            parameters: DeferredParameter::new((
                MOOG_LOW_ALIAS_META.freq_passthrough,
                MOOG_LOW_ALIAS_META.res_passthrough,
            )),
            stages: core::array::from_fn(|_| FixedZeroLowPass::uncompensated(sample_rate)),
            resonance: 0.0,
            side: 0.0,
            last: 0.0,
        }
    }

    #[inline]
    fn update(&mut self) {
        if let Some((frequency, resonance)) = self.parameters.take() {
            let (pole, feedback) = tuning(frequency, resonance);
            for stage in self.stages.iter_mut() {
                stage.set_pole(pole);
            }
            self.resonance = feedback;
        }
    }
}

impl Filter for MoogLowAlias {
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()> {
        MOOG_LOW_ALIAS_META.check(frequency, resonance)?;
        self.parameters.set((frequency, resonance));
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        self.update();
        let [s0, s1, s2, s3] = &mut self.stages;

        let scaled = input * (0.18 + 0.25 * self.resonance);
        let mut y = scaled - self.resonance * self.last;

        let side = saturate(self.side);
        self.side = y * y * 0.062 + side * 0.993;
        y *= 1.0 - side + side * side / 2.0;

        y = s1.process_sample(s0.process_sample(y));
        y = cubic_clip(y);
        y = s3.process_sample(s2.process_sample(y));

        self.last = y;
        y
    }

    fn reset(&mut self) {
        for stage in self.stages.iter_mut() {
            stage.reset();
        }
        self.side = 0.0;
        self.last = 0.0;
    }

    fn meta(&self) -> &'static FilterMeta {
        &MOOG_LOW_ALIAS_META
    }

    fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }
}

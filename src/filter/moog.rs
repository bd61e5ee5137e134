//! Four pole Moog ladder lowpass.
//!
//! Four [`FixedZeroLowPass`] stages in series inside a global feedback loop: the
//! input of each pass is `x - resonance * y[n-1]`. Frequency and resonance are
//! corrected with fitted polynomials before reaching the stages:
//!
//! ```text
//! t = f * (1 + 0.03617 * f * (4 - r)^2)
//! p = 1.25 * t * (1 - 0.595 * t + 0.24 * t^2)
//! R = r * (1 + 0.077 * p - 0.117 * p^2 - 0.049 * p^3)
//! ```
//!
//! A cubic soft clipper sits between the second and third stage. It limits the
//! signal entering the last two stages to +/- 2/3, which keeps the output bounded
//! for any resonance up to the maximum of 3.9999, where the linear ladder would
//! sit on the edge of self-oscillation.
//!
//! Frequency is normalized to Nyquist (1.0 = fs / 2). There is no block path.

use super::pole_zero::FixedZeroLowPass;
use super::{Filter, FilterMeta};
use crate::utils::cubic_clip;
use crate::utils::deferred_parameter::DeferredParameter;
use crate::{Result, SampleRate};

static MOOG_META: FilterMeta = FilterMeta {
    freq_min: 1e-5,
    freq_max: 0.9999,
    freq_nyquist: 1.0,
    freq_passthrough: 1.0,
    res_min: 0.0,
    res_passthrough: 0.0,
    res_max: 3.9999,
    output_delay: 0,
    output_gain: 1.0,
};

/// Corrected stage pole and loop resonance.
pub fn tuning(frequency: f32, resonance: f32) -> (f32, f32) {
    let spread = 4.0 - resonance;
    let tuned = frequency * (1.0 + 0.03617 * frequency * spread * spread);
    let pole = 1.25 * tuned * (1.0 - 0.595 * tuned + 0.24 * tuned * tuned);
    let pole2 = pole * pole;
    let feedback = resonance * (1.0 + 0.077 * pole - 0.117 * pole2 - 0.049 * pole2 * pole);

    (pole, feedback)
}

#[derive(Debug, Clone)]
pub struct MoogLadder {
    sample_rate: SampleRate,
    parameters: DeferredParameter<(f32, f32)>,
    stages: [FixedZeroLowPass; 4],
    resonance: f32,
    last: f32,
}

impl MoogLadder {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            parameters: DeferredParameter::new((
                MOOG_META.freq_passthrough,
                MOOG_META.res_passthrough,
            )),
            stages: core::array::from_fn(|_| FixedZeroLowPass::new(sample_rate)),
            resonance: 0.0,
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

impl Filter for MoogLadder {
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()> {
        MOOG_META.check(frequency, resonance)?;
        self.parameters.set((frequency, resonance));
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        self.update();
        let [s0, s1, s2, s3] = &mut self.stages;

        let mut y = input - self.resonance * self.last;
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
        self.last = 0.0;
    }

    fn meta(&self) -> &'static FilterMeta {
        &MOOG_META
    }

    fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }
}

//! Second order lowpass, direct form 1.
//!
//! Coefficients follow the usual RBJ cookbook lowpass. The resonance parameter is
//! the quality factor Q.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::{BlockFilter, Filter, FilterMeta};
use crate::utils::deferred_parameter::DeferredParameter;
use crate::{Block, Result, SampleRate};

static BIQUAD_META: FilterMeta = FilterMeta {
    freq_min: 1e-5,
    freq_max: 0.4999,
    freq_nyquist: 0.5,
    freq_passthrough: 0.4999,
    res_min: 0.01,
    res_passthrough: 0.7,
    res_max: 1000.0,
    output_delay: 0,
    output_gain: 1.0,
};

#[derive(Debug, Clone)]
pub struct Biquad {
    sample_rate: SampleRate,
    parameters: DeferredParameter<(f32, f32)>,
    gain: f32,
    // Weights of x[n-2], x[n-1], y[n-2], y[n-1].
    coefficients: [f32; 4],
    // x[n-2], x[n-1], y[n-2], y[n-1].
    history: [f32; 4],
}

impl Biquad {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            parameters: DeferredParameter::new((
                BIQUAD_META.freq_passthrough,
                BIQUAD_META.res_passthrough,
            )),
            gain: 0.0,
            coefficients: [0.0; 4],
            history: [0.0; 4],
        }
    }

    #[inline]
    fn update(&mut self) {
        let Some((frequency, q)) = self.parameters.take() else {
            return;
        };
        let omega = 2.0 * core::f64::consts::PI * frequency as f64;
        let (sin, cos) = omega.sin_cos();
        let alpha = sin / (2.0 * q as f64);

        let b0 = (1.0 - cos) / 2.0;
        let b1 = 1.0 - cos;
        let b2 = b0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos;
        let a2 = 1.0 - alpha;

        self.gain = (b0 / a0) as f32;
        self.coefficients = [
            (b2 / a0) as f32,
            (b1 / a0) as f32,
            (-a2 / a0) as f32,
            (-a1 / a0) as f32,
        ];
    }
}

impl Filter for Biquad {
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()> {
        BIQUAD_META.check(frequency, resonance)?;
        self.parameters.set((frequency, resonance));
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        self.update();
        let [c0, c1, c2, c3] = self.coefficients;
        let [x2, x1, y2, y1] = self.history;

        let out = self.gain * input + x2 * c0 + x1 * c1 + y2 * c2 + y1 * c3;
        self.history = [x1, input, y1, out];
        out
    }

    fn reset(&mut self) {
        self.history = [0.0; 4];
    }

    fn meta(&self) -> &'static FilterMeta {
        &BIQUAD_META
    }

    fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    fn as_block_filter(&mut self) -> Option<&mut dyn BlockFilter> {
        Some(self)
    }
}

impl BlockFilter for Biquad {
    #[inline]
    fn process_block(&mut self, input: Block) -> Block {
        self.update();
        let g = self.gain;
        let [c0, c1, c2, c3] = self.coefficients;
        let [x2, x1, y2, y1] = self.history;
        let [in0, in1, in2, in3] = input;

        let out0 = g * in0 + x2 * c0 + x1 * c1 + y2 * c2 + y1 * c3;
        let out1 = g * in1 + x1 * c0 + in0 * c1 + y1 * c2 + out0 * c3;
        let out2 = g * in2 + in0 * c0 + in1 * c1 + out0 * c2 + out1 * c3;
        let out3 = g * in3 + in1 * c0 + in2 * c1 + out1 * c2 + out2 * c3;

        self.history = [in2, in3, out2, out3];
        [out0, out1, out2, out3]
    }
}

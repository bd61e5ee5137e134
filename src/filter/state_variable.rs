//! Chamberlin state variable filter, lowpass output.
//!
//! The frequency is prewarped against the damping to keep the recursion stable up
//! to Nyquist:
//!
//! ```text
//! damping   = min(resonance, 2 - frequency)
//! frequency = frequency * (a - b * frequency * damping)
//! ```
//!
//! with `a = 1.85, b = 0.85`, or `a = 1.22, b = 0.22` for the oversampled variant,
//! which runs the recursion twice per input sample.
//!
//! Neither variant has a block path.

use super::{Filter, FilterMeta};
use crate::utils::deferred_parameter::DeferredParameter;
use crate::{Result, SampleRate};

const BASE_META: FilterMeta = FilterMeta {
    freq_min: 0.0,
    freq_max: 0.9999,
    freq_nyquist: 1.0,
    freq_passthrough: 1.0,
    res_min: 0.01,
    res_passthrough: 1.0,
    res_max: 1.0,
    output_delay: 1,
    output_gain: 1.0,
};

static STATE_VARIABLE_META: FilterMeta = BASE_META;

static STATE_VARIABLE_OVERSAMPLED_META: FilterMeta = FilterMeta {
    output_delay: 0,
    ..BASE_META
};

#[derive(Debug, Default, Clone, Copy)]
struct Chamberlin {
    frequency: f32,
    damping: f32,
    lp: f32,
    bp: f32,
}

impl Chamberlin {
    #[inline]
    fn set_parameters(&mut self, frequency: f32, resonance: f32, a: f32, b: f32) {
        self.damping = resonance.min(2.0 - frequency);
        self.frequency = frequency * (a - b * frequency * self.damping);
    }

    #[inline]
    fn tick(&mut self, input: f32) -> f32 {
        self.lp += self.frequency * self.bp;
        let hp = input - self.lp - self.bp * self.damping;
        self.bp += self.frequency * hp;
        self.lp
    }

    #[inline]
    fn reset(&mut self) {
        self.lp = 0.0;
        self.bp = 0.0;
    }
}

#[derive(Debug, Clone)]
pub struct StateVariable {
    sample_rate: SampleRate,
    parameters: DeferredParameter<(f32, f32)>,
    core: Chamberlin,
}

impl StateVariable {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            parameters: DeferredParameter::new((
                STATE_VARIABLE_META.freq_passthrough,
                STATE_VARIABLE_META.res_passthrough,
            )),
            core: Chamberlin::default(),
        }
    }
}

impl Filter for StateVariable {
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()> {
        STATE_VARIABLE_META.check(frequency, resonance)?;
        self.parameters.set((frequency, resonance));
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        if let Some((frequency, resonance)) = self.parameters.take() {
            self.core.set_parameters(frequency, resonance, 1.85, 0.85);
        }
        self.core.tick(input)
    }

    fn reset(&mut self) {
        self.core.reset();
    }

    fn meta(&self) -> &'static FilterMeta {
        &STATE_VARIABLE_META
    }

    fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }
}

#[derive(Debug, Clone)]
pub struct StateVariableOversampled {
    sample_rate: SampleRate,
    parameters: DeferredParameter<(f32, f32)>,
    core: Chamberlin,
}

impl StateVariableOversampled {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            parameters: DeferredParameter::new((
                STATE_VARIABLE_OVERSAMPLED_META.freq_passthrough,
                STATE_VARIABLE_OVERSAMPLED_META.res_passthrough,
            )),
            core: Chamberlin::default(),
        }
    }
}

impl Filter for StateVariableOversampled {
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()> {
        STATE_VARIABLE_OVERSAMPLED_META.check(frequency, resonance)?;
        self.parameters.set((frequency, resonance));
        Ok(())
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        if let Some((frequency, resonance)) = self.parameters.take() {
            self.core.set_parameters(frequency, resonance, 1.22, 0.22);
        }
        self.core.tick(input);
        self.core.tick(input)
    }

    fn reset(&mut self) {
        self.core.reset();
    }

    fn meta(&self) -> &'static FilterMeta {
        &STATE_VARIABLE_OVERSAMPLED_META
    }

    fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }
}

//! Linear ADSD envelope.
//!
//! Stage lengths are given in samples. Every call to [`Adsd::process_sample`] returns
//! the current value and then advances by one sample, so a freshly triggered envelope
//! with a zero attack starts right at the peak.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const PEAK: f32 = 1.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stage {
    #[default]
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

#[derive(Debug, Clone)]
pub struct Adsd {
    attack: usize,
    decay: usize,
    sustain_level: f32,
    release: usize,

    stage: Stage,
    value: f32,
    increment: f32,
    // Samples spent in the current stage and the length it was entered with.
    cursor: usize,
    stage_length: usize,
}

impl Default for Adsd {
    fn default() -> Self {
        Self {
            attack: 0,
            decay: 0,
            sustain_level: 0.5,
            release: 0,
            stage: Stage::Idle,
            value: 0.0,
            increment: 0.0,
            cursor: 0,
            stage_length: 0,
        }
    }
}

impl Adsd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stage lengths in samples and the sustain level.
    ///
    /// Takes effect at the next stage transition. Fails if `sustain_level` is
    /// outside [0.0, 1.0].
    pub fn set_parameters(
        &mut self,
        attack: usize,
        decay: usize,
        sustain_level: f32,
        release: usize,
    ) -> Result<()> {
        if !(0.0..=PEAK).contains(&sustain_level) {
            return Err(Error::invalid_parameter(
                "sustain_level",
                sustain_level,
                0.0,
                PEAK,
            ));
        }

        self.attack = attack;
        self.decay = decay;
        self.sustain_level = sustain_level;
        self.release = release;
        Ok(())
    }

    /// Starts the attack from the current value.
    pub fn trigger_on(&mut self) {
        if self.attack == 0 {
            self.enter_decay();
        } else {
            self.increment = (PEAK - self.value) / self.attack as f32;
            self.enter(Stage::Attack, self.attack);
        }
    }

    /// Starts the release from the current value. Does nothing while idle.
    pub fn trigger_off(&mut self) {
        if self.stage == Stage::Idle {
            return;
        }
        if self.release == 0 {
            self.enter_idle();
        } else {
            self.increment = -self.value / self.release as f32;
            self.enter(Stage::Release, self.release);
        }
    }

    #[inline]
    pub fn process_sample(&mut self) -> f32 {
        if self.stage == Stage::Idle {
            return 0.0;
        }

        let out = self.value;
        if self.stage == Stage::Sustain {
            return out;
        }

        self.cursor += 1;
        if self.cursor < self.stage_length {
            self.value += self.increment;
            return out;
        }

        match self.stage {
            Stage::Attack => self.enter_decay(),
            Stage::Decay => self.enter_sustain(),
            _ => self.enter_idle(),
        }

        out
    }

    /// Fills `out` with consecutive envelope values.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.process_sample();
        }
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Value returned by the next call to [`process_sample`](Self::process_sample).
    #[inline]
    pub fn value(&self) -> f32 {
        if self.stage == Stage::Idle {
            0.0
        } else {
            self.value
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.stage != Stage::Idle
    }

    fn enter(&mut self, stage: Stage, length: usize) {
        self.stage = stage;
        self.stage_length = length;
        self.cursor = 0;
    }

    fn enter_decay(&mut self) {
        // A zero length decay falls through to sustain on the next sample.
        let length = self.decay.max(1);
        self.value = PEAK;
        self.increment = (self.sustain_level - PEAK) / length as f32;
        self.enter(Stage::Decay, length);
    }

    fn enter_sustain(&mut self) {
        self.value = self.sustain_level;
        self.increment = 0.0;
        self.enter(Stage::Sustain, 0);
    }

    fn enter_idle(&mut self) {
        self.value = 0.0;
        self.increment = 0.0;
        self.enter(Stage::Idle, 0);
    }
}

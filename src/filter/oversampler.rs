//! Naive 2x oversampling decorator.
//!
//! Every input sample is fed twice to the wrapped filter and only the second output
//! is kept. Parameters, metadata and sample rate are those of the wrapped filter.

use super::{BlockFilter, Filter, FilterMeta};
use crate::{Block, Result, SampleRate};

#[derive(Debug, Clone)]
pub struct Oversampler<F> {
    filter: F,
}

impl<F: Filter> Oversampler<F> {
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    pub fn inner(&self) -> &F {
        &self.filter
    }

    pub fn into_inner(self) -> F {
        self.filter
    }
}

impl<F: Filter + Clone> Filter for Oversampler<F> {
    fn set_parameters(&mut self, frequency: f32, resonance: f32) -> Result<()> {
        self.filter.set_parameters(frequency, resonance)
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        self.filter.process_sample(input);
        self.filter.process_sample(input)
    }

    fn reset(&mut self) {
        self.filter.reset();
    }

    fn meta(&self) -> &'static FilterMeta {
        self.filter.meta()
    }

    fn sample_rate(&self) -> SampleRate {
        self.filter.sample_rate()
    }

    fn as_block_filter(&mut self) -> Option<&mut dyn BlockFilter> {
        Some(self)
    }
}

impl<F: Filter + Clone> BlockFilter for Oversampler<F> {
    #[inline]
    fn process_block(&mut self, input: Block) -> Block {
        input.map(|sample| {
            self.filter.process_sample(sample);
            self.filter.process_sample(sample)
        })
    }
}

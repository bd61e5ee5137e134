//! Single-zero high frequency booster compensating the droop of the BLIT tables.

const COEFFICIENT: f32 = 0.35;

#[derive(Debug, Default, Clone, Copy)]
pub struct PostFilter {
    last: f32,
}

impl PostFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the input history.
    #[inline]
    pub fn reset(&mut self) {
        self.last = 0.0;
    }

    #[inline]
    pub fn process(&mut self, sample: f32) -> f32 {
        let out = sample - COEFFICIENT * self.last;
        self.last = sample;
        out
    }
}

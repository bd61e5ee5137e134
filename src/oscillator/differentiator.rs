//! First order backward difference.

#[derive(Debug, Default, Clone, Copy)]
pub struct Differentiator {
    last: f32,
}

impl Differentiator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reseeds the stored previous input.
    #[inline]
    pub fn set_history(&mut self, last: f32) {
        self.last = last;
    }

    #[inline]
    pub fn process(&mut self, sample: f32) -> f32 {
        let out = sample - self.last;
        self.last = sample;
        out
    }
}

//! Parameter cell applying changes lazily.
//!
//! Setters only record the new target. The owner picks it up right before the next
//! sample or block is computed, so any number of parameter changes between two
//! process calls costs a single coefficient update.

#[derive(Debug, Default, Copy, Clone)]
pub struct DeferredParameter<T = f32> {
    target: T,
    stale: bool,
}

impl<T: Copy> DeferredParameter<T> {
    /// Creates a cell whose initial value is pending.
    pub fn new(value: T) -> Self {
        Self {
            target: value,
            stale: true,
        }
    }

    /// Records a new target and marks it as pending.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.target = value;
        self.stale = true;
    }

    /// Returns the target once after each [`set`](Self::set), `None` otherwise.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if self.stale {
            self.stale = false;
            Some(self.target)
        } else {
            None
        }
    }

    #[inline]
    pub fn target(&self) -> T {
        self.target
    }
}

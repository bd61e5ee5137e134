//! Utility functions.
//!
//! Small numeric helpers shared by the oscillators, filters and table builder.

pub mod deferred_parameter;
pub mod window;

/// Adds `increment` to `phase` and wraps the result into [-1.0, 1.0).
///
/// `phase` is expected in [-1.0, 1.0) and `increment` in [0.0, 2.0].
#[inline]
pub fn increment_and_wrap(phase: f32, increment: f32) -> f32 {
    let out = phase + increment;
    if out >= 1.0 {
        out - 2.0
    } else {
        out
    }
}

/// Subtracts `decrement` from `phase` and wraps the result into [-1.0, 1.0).
#[inline]
pub fn decrement_and_wrap(phase: f32, decrement: f32) -> f32 {
    let out = phase - decrement;
    if out < -1.0 {
        out + 2.0
    } else {
        out
    }
}

/// Wraps an arbitrary phase in [-1.0, 1.0] into [-1.0, 1.0).
#[inline]
pub fn wrap(phase: f32) -> f32 {
    if phase >= 1.0 {
        phase - 2.0
    } else {
        phase
    }
}

/// Cubic soft clipper saturating at +/- 2/3.
#[inline]
pub fn cubic_clip(x: f32) -> f32 {
    if x >= 1.0 {
        2.0 / 3.0
    } else if x <= -1.0 {
        -2.0 / 3.0
    } else {
        x - x * x * x / 3.0
    }
}

#[inline]
pub fn saturate(x: f32) -> f32 {
    x.clamp(-1.0, 1.0)
}

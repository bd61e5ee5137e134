//! Error type shared by all parameter setters.
//!
//! Errors are only produced at construction and parameter-set time. The per-sample
//! and per-block processing functions are infallible.

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// Sample rate is zero, negative or not finite.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(f32),

    /// Parameter outside of the range accepted by the receiving component.
    #[error("parameter `{name}` = {value} is outside of [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Operation not implemented by this variant.
    #[error("operation `{0}` is not supported by this variant")]
    Unsupported(&'static str),
}

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, value: f32, min: f32, max: f32) -> Self {
        log::debug!("Rejected {name} = {value}, expected [{min}, {max}]");
        Self::InvalidParameter {
            name,
            value,
            min,
            max,
        }
    }
}

//! Shim error types

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShimError {
    #[error("Entropy unavailable")]
    EntropyUnavailable,

    #[error("Output buffer too small: need {needed}, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("Malformed base64 input")]
    MalformedBase64,

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, ShimError>;

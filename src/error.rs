use reconstruct_maths::{InterpolationError, RadixError};
use thiserror::Error;

/// Everything that can make a single reconstruction fail. None of these are recovered from: the caller decides how
/// to present the failure.
#[derive(Error, Debug)]
pub enum RecoveryError {
    #[error("malformed share document")]
    Document(#[from] serde_json::Error),

    #[error("share key {0:?} is not a positive share index")]
    InvalidShareIndex(String),

    #[error("{field} must be a non-negative integer, got {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("threshold k = {k} must be in the range 1..=n (n = {n})")]
    InvalidThreshold { n: usize, k: usize },

    #[error("not enough shares to reconstruct the secret (need {threshold}, got {available})")]
    InsufficientShares { threshold: usize, available: usize },

    #[error("cannot decode share {index}")]
    Decode {
        index: u64,
        #[source]
        source: RadixError,
    },

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

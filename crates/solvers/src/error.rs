use thiserror::Error;

use extremum_core::{BoundsError, ConfigError};

use crate::Method;

/// Errors that can occur when setting up or running a search.
///
/// Every variant is a precondition failure reported before or instead of a
/// result; no strategy retries internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(
        "unknown method `{name}`, expected one of: dichotomy, golden_ratio, fibonacci, random_search"
    )]
    UnknownMethod { name: String },

    #[error("{method} did not converge after {iters} iterations: bracket width {width} is above tolerance")]
    NonConvergence {
        method: Method,
        iters: usize,
        width: f64,
    },

    #[error("{method} needs at least one step, got n = {n}")]
    InvalidSampleCount { method: Method, n: usize },

    #[error("fibonacci numbers overflow beyond index {max}, got n = {n}", max = crate::MAX_FIBONACCI_INDEX)]
    FibonacciOverflow { n: usize },

    #[error("probe offset {delta} must be below 1 for fibonacci search")]
    ProbeOffsetTooLarge { delta: f64 },

    #[error("interval bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// The operating system could not seed the default sampler.
    #[error("cannot seed the default sampler from the OS: {reason}")]
    Entropy { reason: String },
}

impl From<BoundsError> for Error {
    fn from(err: BoundsError) -> Self {
        match err {
            BoundsError::NonFinite { value } => Self::NonFiniteBound { value },
        }
    }
}

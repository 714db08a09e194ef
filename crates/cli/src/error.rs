//! CLI error types

use thiserror::Error;

use extremum_quadrature::QuadratureError;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Error, Debug)]
pub enum CliError {
    /// The search could not run or did not converge.
    #[error("search failed: {0}")]
    Search(#[from] extremum_solvers::Error),

    /// Integration failed.
    #[error("integration failed: {0}")]
    Quadrature(#[from] QuadratureError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a prompt was waiting for an answer.
    #[error("input ended while waiting for: {prompt}")]
    UnexpectedEof { prompt: String },

    /// A yes/no prompt got something else.
    #[error("expected yes or no, got `{response}`")]
    UnrecognizedResponse { response: String },

    #[error("not a number: `{input}`")]
    InvalidNumber { input: String },

    /// The left bound was entered greater than the right bound.
    #[error("left bound {left} is greater than right bound {right}")]
    InvalidInterval { left: f64, right: f64 },
}

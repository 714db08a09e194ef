//! Composite trapezoid and Romberg integration of scalar functions.
//!
//! [`romberg`] builds the full extrapolation table so callers can inspect
//! every row and estimate the observed order of accuracy, not just read the
//! final value.

mod error;
mod romberg;
mod trapezoid;

pub use error::QuadratureError;
pub use romberg::{MAX_ROWS, RombergTable, romberg};
pub use trapezoid::trapezoid;

//! Core types for bounded one-dimensional extremum search.
//!
//! This crate defines the shared abstractions that search strategies and
//! observers build on:
//!
//! - [`SearchProblem`]: an objective function paired with a validated interval
//!   and the tolerances that drive a search
//! - [`Bracket`]: an ordered interval `[left, right]` known to contain the extremum
//! - [`SamplePoint`]: an evaluated `(x, y)` pair
//! - [`Config`]: probe offset, tolerance, and iteration settings
//! - [`Observer`]: receives strategy events and optionally returns control actions

mod bracket;
mod config;
mod observer;
mod point;
mod problem;

pub use bracket::{Bracket, BoundsError};
pub use config::{Config, ConfigError};
pub use observer::Observer;
pub use point::SamplePoint;
pub use problem::SearchProblem;

//! Strategies for locating the extremum of a unimodal function on an interval.
//!
//! A [`Solver`] owns a [`SearchProblem`] and dispatches to one of four
//! strategies selected by [`Method`]:
//!
//! - [`Dichotomy`]: halves the bracket around a pair of probes `delta` apart
//! - [`GoldenSection`]: places probes by the inverse golden ratio
//! - [`Fibonacci`]: a fixed number of steps with Fibonacci-ratio probes
//! - [`RandomSearch`]: the best of `n` uniform samples
//!
//! All strategies minimize. Negate the objective to search for a maximum.
//!
//! # Observer Events
//!
//! Every strategy reports progress through an [`Observer`]. Bracketing
//! strategies emit [`Event::Bracket`] for the initial bracket and after every
//! update; random search emits [`Event::Sample`] for each draw. Observers can
//! return [`Action::StopEarly`] to end the search with the current estimate.
//! Trace recording is built on the same mechanism (see [`TraceRecorder`]).
//!
//! [`SearchProblem`]: extremum_core::SearchProblem
//! [`Observer`]: extremum_core::Observer

mod dichotomy;
mod error;
mod event;
mod fibonacci;
mod golden_section;
mod method;
mod random_search;
mod sampler;
mod sequence;
mod solution;
mod solver;
mod strategy;
mod trace;


pub use dichotomy::Dichotomy;
pub use error::Error;
pub use event::{Action, Event};
pub use fibonacci::Fibonacci;
pub use golden_section::GoldenSection;
pub use method::Method;
pub use random_search::RandomSearch;
pub use sampler::Sampler;
pub use sequence::{MAX_FIBONACCI_INDEX, fibonacci_numbers};
pub use solution::{Solution, Status};
pub use solver::Solver;
pub use strategy::Strategy;
pub use trace::{BracketTrace, SampleTrace, Trace, TraceRecorder};

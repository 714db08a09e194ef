//! Capability traits for cross-strategy observers.
//!
//! These traits abstract over event and action types, so an observer can be
//! written once and used with any strategy whose events expose what it needs.
//!
//! # Event traits
//!
//! - [`HasBracket`]: events that may carry a bracket
//! - [`HasSample`]: events that may carry an evaluated sample
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use extremum_core::Observer;
//! use extremum_observers::traits::{CanStopEarly, HasSample};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let point = event.sample()?;
//!         (point.y <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use extremum_core::{Bracket, SamplePoint};
use extremum_solvers::{Action, Event};

/// An event that may carry a bracket.
pub trait HasBracket {
    /// Returns the bracket for this event, if it has one.
    fn bracket(&self) -> Option<Bracket>;
}

/// An event that may carry an evaluated sample.
pub trait HasSample {
    /// Returns the sample for this event, if it has one.
    fn sample(&self) -> Option<SamplePoint>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

impl HasBracket for Event {
    fn bracket(&self) -> Option<Bracket> {
        match self {
            Event::Bracket { bracket, .. } => Some(*bracket),
            Event::Sample { .. } => None,
        }
    }
}

impl HasSample for Event {
    fn sample(&self) -> Option<SamplePoint> {
        match self {
            Event::Sample { point, .. } => Some(*point),
            Event::Bracket { .. } => None,
        }
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

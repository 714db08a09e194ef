//! Reusable observers for extremum search strategies.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the strategies in `extremum-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for generic observers
//!   ([`HasBracket`], [`HasSample`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: emits every event through `tracing`
//! - [`WidthLimit`]: stops a bracketing search once the bracket is narrow enough
//!
//! [`Observer`]: extremum_core::Observer
//! [`HasBracket`]: traits::HasBracket
//! [`HasSample`]: traits::HasSample
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod log;
mod width_limit;

pub use log::LogObserver;
pub use width_limit::WidthLimit;

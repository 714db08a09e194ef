use crate::Trace;

/// How a search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed below the configured tolerance.
    Converged,

    /// A fixed-budget strategy used all of its steps or samples.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Located point, always within the original interval.
    pub x: f64,

    /// Objective value at `x`.
    pub y: f64,

    /// Bracket updates performed or samples drawn.
    pub iters: usize,

    /// Intermediate brackets or samples, when requested.
    pub trace: Option<Trace>,
}

impl Solution {
    /// Creates a solution without a trace.
    pub(crate) fn new(status: Status, x: f64, y: f64, iters: usize) -> Self {
        Self {
            status,
            x,
            y,
            iters,
            trace: None,
        }
    }

    /// Attaches a recorded trace.
    pub(crate) fn with_trace(self, trace: Trace) -> Self {
        Self {
            trace: Some(trace),
            ..self
        }
    }
}

use extremum_core::{Bracket, SamplePoint};

/// Events emitted by the search strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A bracketing strategy produced a bracket.
    ///
    /// `iter` is zero for the initial bracket and counts updates after that.
    Bracket {
        /// Number of bracket updates so far.
        iter: usize,

        /// The current bracket.
        bracket: Bracket,
    },

    /// Random search drew and evaluated a sample.
    Sample {
        /// Number of samples drawn so far, including this one.
        iter: usize,

        /// The sampled point.
        point: SamplePoint,
    },
}

impl Event {
    /// Returns the iteration counter of this event.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Bracket { iter, .. } | Self::Sample { iter, .. } => *iter,
        }
    }
}

/// Actions an observer can take during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the current estimate.
    StopEarly,
}

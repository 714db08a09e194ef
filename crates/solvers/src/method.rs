use std::{fmt, str::FromStr};

use crate::Error;

/// The search strategies a [`Solver`](crate::Solver) can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Probe-pair interval halving.
    Dichotomy,

    /// Golden-section search.
    GoldenSection,

    /// Fibonacci search.
    Fibonacci,

    /// Random sampling search.
    RandomSearch,
}

impl Method {
    /// All methods, in display order.
    pub const ALL: [Self; 4] = [
        Self::Dichotomy,
        Self::GoldenSection,
        Self::Fibonacci,
        Self::RandomSearch,
    ];

    /// Returns the identifier used to select this method by name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dichotomy => "dichotomy",
            Self::GoldenSection => "golden_ratio",
            Self::Fibonacci => "fibonacci",
            Self::RandomSearch => "random_search",
        }
    }

    /// Returns true if the method narrows a bracket rather than sampling.
    #[must_use]
    pub fn is_bracketing(self) -> bool {
        !matches!(self, Self::RandomSearch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == name)
            .ok_or_else(|| Error::UnknownMethod {
                name: name.to_owned(),
            })
    }
}

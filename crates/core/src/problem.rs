use crate::{BoundsError, Bracket, Config};

/// A scalar objective paired with the interval and tolerances of one search.
///
/// The interval is normalized so that `left <= right` regardless of the order
/// the endpoints were given in. A problem is immutable once constructed.
#[derive(Debug, Clone)]
pub struct SearchProblem<F> {
    function: F,
    bracket: Bracket,
    config: Config,
}

impl<F> SearchProblem<F>
where
    F: Fn(f64) -> f64,
{
    /// Creates a problem over `interval`, given in either order.
    ///
    /// # Errors
    ///
    /// Returns `BoundsError` if an endpoint is NaN or infinite.
    pub fn new(function: F, interval: [f64; 2], config: Config) -> Result<Self, BoundsError> {
        Ok(Self {
            function,
            bracket: Bracket::new(interval)?,
            config,
        })
    }

    /// Evaluates the objective at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}

impl<F> SearchProblem<F> {
    /// Returns the initial bracket.
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        self.bracket
    }

    /// Returns the search config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn normalizes_interval_and_evaluates() {
        let problem = SearchProblem::new(|x: f64| x * x, [4.0, -2.0], Config::default())
            .expect("valid problem");

        assert_eq!(problem.bracket().as_array(), [-2.0, 4.0]);
        assert_relative_eq!(problem.eval(3.0), 9.0);
    }

    #[test]
    fn rejects_infinite_bound() {
        let result = SearchProblem::new(|x: f64| x, [f64::NEG_INFINITY, 0.0], Config::default());
        assert!(matches!(result, Err(BoundsError::NonFinite { .. })));
    }
}

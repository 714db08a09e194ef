use thiserror::Error;

/// Tolerances and budgets shared by every search strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    delta: f64,
    eps: f64,
    n: usize,
    max_iters: usize,
}

/// Errors that can occur when validating a search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delta must be finite and positive")]
    Delta,

    #[error("eps must be finite and non-negative")]
    Eps,

    #[error("max_iters must be positive")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delta: 1e-6,
            eps: 1e-6,
            n: 25,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// `n` is not checked here: only the fixed-budget strategies use it, and
    /// they reject a zero count themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if `delta` is not a finite positive number, if `eps`
    /// is negative or non-finite, or if `max_iters` is zero.
    pub fn new(delta: f64, eps: f64, n: usize, max_iters: usize) -> Result<Self, ConfigError> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ConfigError::Delta);
        }
        if !eps.is_finite() || eps < 0.0 {
            return Err(ConfigError::Eps);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            delta,
            eps,
            n,
            max_iters,
        })
    }

    /// Returns the probe offset.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the iteration or sample count for fixed-budget strategies.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the iteration cap for tolerance-driven strategies.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns a copy with a different iteration or sample count.
    #[must_use]
    pub fn with_n(self, n: usize) -> Self {
        Self { n, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_relative_eq!(config.delta(), 1e-6);
        assert_relative_eq!(config.eps(), 1e-6);
        assert_eq!(config.n(), 25);
        assert_eq!(config.max_iters(), 1000);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(-1.0, 1e-6, 25, 10), Err(ConfigError::Delta));
        assert_eq!(Config::new(0.0, 1e-6, 25, 10), Err(ConfigError::Delta));
        assert_eq!(Config::new(f64::NAN, 1e-6, 25, 10), Err(ConfigError::Delta));
        assert_eq!(Config::new(1e-6, f64::INFINITY, 25, 10), Err(ConfigError::Eps));
        assert_eq!(Config::new(1e-6, 1e-6, 25, 0), Err(ConfigError::MaxIters));
    }

    #[test]
    fn zero_count_is_left_to_strategies() {
        let config = Config::new(1e-6, 0.0, 0, 1).expect("valid config");
        assert_eq!(config.n(), 0);
        assert_eq!(config.with_n(7).n(), 7);
    }
}

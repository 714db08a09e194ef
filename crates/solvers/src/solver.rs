use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use extremum_core::{Config, Observer, SearchProblem};

use crate::{
    Action, Dichotomy, Error, Event, Fibonacci, GoldenSection, Method, RandomSearch, Sampler,
    Solution, Strategy, TraceRecorder,
};

/// Owns a [`SearchProblem`] and dispatches searches to the selected strategy.
///
/// The sampler is only used by [`Method::RandomSearch`]. By default it is an
/// OS-seeded [`StdRng`]; use [`Solver::with_sampler`] for reproducible runs.
#[derive(Debug)]
pub struct Solver<F, S = StdRng> {
    problem: SearchProblem<F>,
    sampler: S,
}

impl<F> Solver<F>
where
    F: Fn(f64) -> f64,
{
    /// Creates a solver over `interval` with the default config.
    ///
    /// The endpoints may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteBound`] if an endpoint is NaN or infinite,
    /// or [`Error::Entropy`] if the OS cannot seed the default sampler.
    pub fn new(function: F, interval: [f64; 2]) -> Result<Self, Error> {
        Self::with_config(function, interval, Config::default())
    }

    /// Creates a solver over `interval` with a custom config.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::new`].
    pub fn with_config(function: F, interval: [f64; 2], config: Config) -> Result<Self, Error> {
        let problem = SearchProblem::new(function, interval, config)?;
        let sampler = StdRng::try_from_os_rng().map_err(|err| Error::Entropy {
            reason: err.to_string(),
        })?;
        Ok(Self { problem, sampler })
    }
}

impl<F, S> Solver<F, S> {
    /// Replaces the sampler used by random search.
    #[must_use]
    pub fn with_sampler<T: Sampler>(self, sampler: T) -> Solver<F, T> {
        Solver {
            problem: self.problem,
            sampler,
        }
    }

    /// Returns the problem this solver searches.
    #[must_use]
    pub fn problem(&self) -> &SearchProblem<F> {
        &self.problem
    }
}

impl<F, S> Solver<F, S>
where
    F: Fn(f64) -> f64,
    S: Sampler,
{
    /// Runs `method` and returns the located point.
    ///
    /// With `want_trace`, the solution carries every bracket (or sample) the
    /// strategy produced.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is unusable for `method` or a
    /// tolerance-driven method cannot converge.
    pub fn solve(&mut self, method: Method, want_trace: bool) -> Result<Solution, Error> {
        self.solve_observed(method, want_trace, ())
    }

    /// Runs the method named `name` (see [`Method::name`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMethod`] if `name` matches no method, and
    /// otherwise the same errors as [`Solver::solve`].
    pub fn solve_named(&mut self, name: &str, want_trace: bool) -> Result<Solution, Error> {
        let method = name.parse()?;
        self.solve(method, want_trace)
    }

    /// Runs `method`, forwarding every event to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::solve`].
    pub fn solve_observed<Obs>(
        &mut self,
        method: Method,
        want_trace: bool,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        debug!(%method, want_trace, "dispatching search");

        if !want_trace {
            return self.dispatch(method, &mut observer);
        }

        let mut recorder = TraceRecorder::new(method, &mut observer);
        let solution = self.dispatch(method, &mut recorder)?;
        Ok(solution.with_trace(recorder.into_trace()))
    }

    fn dispatch<Obs>(&mut self, method: Method, observer: &mut Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        let problem = &self.problem;
        match method {
            Method::Dichotomy => Dichotomy.search(problem, observer),
            Method::GoldenSection => GoldenSection.search(problem, observer),
            Method::Fibonacci => Fibonacci.search(problem, observer),
            Method::RandomSearch => RandomSearch::new(&mut self.sampler).search(problem, observer),
        }
    }
}

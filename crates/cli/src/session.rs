use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use tracing::info;

use extremum_observers::LogObserver;
use extremum_solvers::{Solution, Solver};

use crate::{CliError, Prompt, Result, render_trace};

const LEFT: &str = "Left bound of the interval: ";
const RIGHT: &str = "Right bound of the interval: ";
const METHOD: &str = "Method (dichotomy, golden_ratio, fibonacci, random_search): ";
const MINIMIZE: &str = "Minimize the function? yes/no: ";
const TRACE: &str = "Print the search steps? yes/no: ";
const EXIT: &str = "Exit? yes/no: ";

/// The function explored by the interactive session, `exp(-x) - 2 cos(x)`.
#[must_use]
pub fn objective(x: f64) -> f64 {
    (-x).exp() - 2.0 * x.cos()
}

/// Interactive search loop over [`objective`].
///
/// Each round asks for the interval, method, direction and whether to show
/// the trace, prints the result, then asks whether to exit. Any malformed
/// answer ends the session with an error.
#[derive(Debug)]
pub struct Session<R, W> {
    prompt: Prompt<R, W>,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session; `rng` drives random search.
    pub fn new(prompt: Prompt<R, W>, rng: StdRng) -> Self {
        Self { prompt, rng }
    }

    /// Runs rounds until the user chooses to exit.
    ///
    /// # Errors
    ///
    /// Returns the first error from any round or from the exit question.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.round()?;
            if self.prompt.ask_yes_no(EXIT)? {
                return Ok(());
            }
        }
    }

    /// Runs a single round and returns its solution in the caller's direction.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed input, a reversed interval, or a
    /// failed search.
    pub fn round(&mut self) -> Result<Solution> {
        let left = self.prompt.ask_number(LEFT)?;
        let right = self.prompt.ask_number(RIGHT)?;
        if left > right {
            return Err(CliError::InvalidInterval { left, right });
        }

        let method = self.prompt.ask_method(METHOD)?;
        let minimize = self.prompt.ask_yes_no(MINIMIZE)?;
        let show_trace = self.prompt.ask_yes_no(TRACE)?;

        let sign = if minimize { 1.0 } else { -1.0 };
        info!(%method, left, right, minimize, "starting search");

        let mut solver = Solver::new(move |x: f64| sign * objective(x), [left, right])?
            .with_sampler(&mut self.rng);
        let mut solution = solver.solve_observed(method, show_trace, LogObserver::new())?;
        solution.y *= sign;

        let out = self.prompt.output();
        if let Some(trace) = &solution.trace {
            write!(out, "{}", render_trace(trace))?;
        }
        writeln!(out, "x: {}; y: {}", solution.x, solution.y)?;

        Ok(solution)
    }

    /// Consumes the session, returning the output.
    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }
}

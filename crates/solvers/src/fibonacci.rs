use std::ops::ControlFlow;

use extremum_core::{Observer, SearchProblem};

use crate::{
    Action, Error, Event, Method, Solution, Status,
    sequence::fibonacci_numbers,
    strategy::{BracketWalk, Probed, Strategy},
};

/// Fibonacci search.
///
/// Runs exactly `n - 1` bracket updates, where `n` comes from the config,
/// independent of `eps`. Step `s` places probes with the ratio
/// `F[n-s-1] / F[n-s]`; the last step uses `(1 + delta) / 2` so its two
/// probes stay distinct. Updates follow the same three-way rule as
/// [`Dichotomy`](crate::Dichotomy).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fibonacci;

impl Strategy for Fibonacci {
    const METHOD: Method = Method::Fibonacci;

    fn search<F, Obs>(
        &mut self,
        problem: &SearchProblem<F>,
        observer: &mut Obs,
    ) -> Result<Solution, Error>
    where
        F: Fn(f64) -> f64,
        Obs: Observer<Event, Action>,
    {
        let config = problem.config();
        let (n, delta) = (config.n(), config.delta());

        if n == 0 {
            return Err(Error::InvalidSampleCount {
                method: Self::METHOD,
                n,
            });
        }
        if delta >= 1.0 {
            return Err(Error::ProbeOffsetTooLarge { delta });
        }
        let numbers = fibonacci_numbers(n)?;

        let (mut walk, flow) = BracketWalk::start(Self::METHOD, problem.bracket(), observer);
        if flow.is_break() {
            return Ok(walk.finish(problem, Status::StoppedByObserver));
        }
        if walk.bracket().is_degenerate() {
            return Ok(walk.finish(problem, Status::Converged));
        }

        for step in 0..n - 1 {
            #[allow(clippy::cast_precision_loss)]
            let ratio = if step + 2 < n {
                numbers[n - step - 1] as f64 / numbers[n - step] as f64
            } else {
                0.5 * (1.0 + delta)
            };

            let bracket = walk.bracket();
            let probes = bracket.probes(ratio);
            let next = Probed::compare(problem, probes).shrink(bracket, probes);

            if let ControlFlow::Break(()) = walk.advance(next) {
                return Ok(walk.finish(problem, Status::StoppedByObserver));
            }
        }

        Ok(walk.finish(problem, Status::Completed))
    }
}

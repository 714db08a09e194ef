use tracing::debug;

use extremum_core::{Observer, SamplePoint, SearchProblem};

use crate::{Action, Error, Event, Method, Sampler, Solution, Status, strategy::Strategy};

/// Random sampling search.
///
/// Draws `n` samples uniformly from the interval and returns the one with
/// the lowest objective, keeping the first on ties. The search always
/// minimizes; negate the objective to find a maximum.
#[derive(Debug)]
pub struct RandomSearch<'s, S: ?Sized> {
    sampler: &'s mut S,
}

impl<'s, S> RandomSearch<'s, S>
where
    S: Sampler + ?Sized,
{
    /// Creates a random search that draws from `sampler`.
    pub fn new(sampler: &'s mut S) -> Self {
        Self { sampler }
    }
}

impl<S> Strategy for RandomSearch<'_, S>
where
    S: Sampler + ?Sized,
{
    const METHOD: Method = Method::RandomSearch;

    fn search<F, Obs>(
        &mut self,
        problem: &SearchProblem<F>,
        observer: &mut Obs,
    ) -> Result<Solution, Error>
    where
        F: Fn(f64) -> f64,
        Obs: Observer<Event, Action>,
    {
        let n = problem.config().n();
        if n == 0 {
            return Err(Error::InvalidSampleCount {
                method: Self::METHOD,
                n,
            });
        }

        let bracket = problem.bracket();
        let (low, high) = (bracket.left(), bracket.right());
        debug!(method = %Self::METHOD, low, high, n, "starting search");

        // A single point needs no sampling: report it as the only sample.
        if bracket.is_degenerate() {
            let point = SamplePoint::new(low, problem.eval(low));
            let status = match observer.observe(&Event::Sample { iter: 0, point }) {
                Some(Action::StopEarly) => Status::StoppedByObserver,
                None => Status::Converged,
            };
            return Ok(Solution::new(status, point.x, point.y, 0));
        }

        let mut best: Option<SamplePoint> = None;
        let mut status = Status::Completed;
        let mut iters = 0;

        for iter in 1..=n {
            let x = self.sampler.sample(low, high).clamp(low, high);
            let point = SamplePoint::new(x, problem.eval(x));
            iters = iter;

            if best.is_none_or(|best| point.y < best.y || best.y.is_nan()) {
                best = Some(point);
            }

            if let Some(Action::StopEarly) = observer.observe(&Event::Sample { iter, point }) {
                status = Status::StoppedByObserver;
                break;
            }
        }

        let best = best.ok_or(Error::InvalidSampleCount {
            method: Self::METHOD,
            n,
        })?;
        debug!(method = %Self::METHOD, x = best.x, y = best.y, iters, ?status, "search finished");

        Ok(Solution::new(status, best.x, best.y, iters))
    }
}

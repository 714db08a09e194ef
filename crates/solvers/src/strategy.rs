use std::ops::ControlFlow;

use tracing::debug;

use extremum_core::{Bracket, Observer, SearchProblem};

use crate::{Action, Error, Event, Method, Solution, Status};

/// A search strategy: consumes a problem and produces a solution.
///
/// Each implementation corresponds to one [`Method`] variant.
pub trait Strategy {
    /// The method this strategy implements.
    const METHOD: Method;

    /// Runs the search, reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem's config makes the strategy unusable,
    /// or if a tolerance-driven strategy cannot converge.
    fn search<F, Obs>(
        &mut self,
        problem: &SearchProblem<F>,
        observer: &mut Obs,
    ) -> Result<Solution, Error>
    where
        F: Fn(f64) -> f64,
        Obs: Observer<Event, Action>;
}

/// Ordering of the objective at the left and right probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probed {
    /// `f(l) > f(r)`: the minimum lies right of `l`.
    LeftHigher,

    /// `f(l) < f(r)`: the minimum lies left of `r`.
    RightHigher,

    /// Neither is greater, NaN included.
    Tied,
}

impl Probed {
    /// Evaluates the objective at both probes and compares the values.
    pub(crate) fn compare<F>(problem: &SearchProblem<F>, [l, r]: [f64; 2]) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let (fl, fr) = (problem.eval(l), problem.eval(r));
        if fl > fr {
            Self::LeftHigher
        } else if fl < fr {
            Self::RightHigher
        } else {
            Self::Tied
        }
    }

    /// The three-way bracket update shared by dichotomy and Fibonacci search.
    ///
    /// A tie keeps only the span between the probes.
    pub(crate) fn shrink(self, bracket: Bracket, [l, r]: [f64; 2]) -> Bracket {
        match self {
            Self::LeftHigher => bracket.shrink_left(l),
            Self::RightHigher => bracket.shrink_right(r),
            Self::Tied => bracket.shrink_both(l, r),
        }
    }
}

/// Bookkeeping for a bracketing search: the current bracket, the update
/// count, and the observer that sees every bracket.
pub(crate) struct BracketWalk<'o, Obs> {
    method: Method,
    bracket: Bracket,
    iters: usize,
    observer: &'o mut Obs,
}

impl<'o, Obs> BracketWalk<'o, Obs>
where
    Obs: Observer<Event, Action>,
{
    /// Starts a walk at `bracket` and reports it as iteration zero.
    pub(crate) fn start(
        method: Method,
        bracket: Bracket,
        observer: &'o mut Obs,
    ) -> (Self, ControlFlow<()>) {
        debug!(
            %method,
            left = bracket.left(),
            right = bracket.right(),
            "starting search"
        );
        let mut walk = Self {
            method,
            bracket,
            iters: 0,
            observer,
        };
        let flow = walk.emit();
        (walk, flow)
    }

    pub(crate) fn bracket(&self) -> Bracket {
        self.bracket
    }

    pub(crate) fn iters(&self) -> usize {
        self.iters
    }

    /// Moves to `next` and reports it.
    pub(crate) fn advance(&mut self, next: Bracket) -> ControlFlow<()> {
        debug_assert!(
            next.width() <= self.bracket.width(),
            "bracket widened from {} to {}",
            self.bracket.width(),
            next.width()
        );
        self.bracket = next;
        self.iters += 1;
        self.emit()
    }

    /// Builds the solution at the midpoint of the current bracket.
    pub(crate) fn finish<F>(self, problem: &SearchProblem<F>, status: Status) -> Solution
    where
        F: Fn(f64) -> f64,
    {
        let x = self.bracket.midpoint();
        let y = problem.eval(x);
        debug!(
            method = %self.method,
            x,
            y,
            iters = self.iters,
            ?status,
            "search finished"
        );
        Solution::new(status, x, y, self.iters)
    }

    /// Builds the non-convergence error for the current bracket.
    pub(crate) fn non_convergence(&self) -> Error {
        Error::NonConvergence {
            method: self.method,
            iters: self.iters,
            width: self.bracket.width(),
        }
    }

    fn emit(&mut self) -> ControlFlow<()> {
        let event = Event::Bracket {
            iter: self.iters,
            bracket: self.bracket,
        };
        match self.observer.observe(&event) {
            Some(Action::StopEarly) => ControlFlow::Break(()),
            None => ControlFlow::Continue(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use extremum_core::Config;

    fn problem() -> SearchProblem<impl Fn(f64) -> f64> {
        SearchProblem::new(|x: f64| (x - 1.0).abs(), [0.0, 4.0], Config::default())
            .expect("valid problem")
    }

    #[test]
    fn compare_orders_probe_values() {
        let problem = problem();
        assert_eq!(Probed::compare(&problem, [0.5, 3.0]), Probed::RightHigher);
        assert_eq!(Probed::compare(&problem, [3.0, 1.5]), Probed::LeftHigher);
        assert_eq!(Probed::compare(&problem, [0.5, 1.5]), Probed::Tied);
    }

    #[test]
    fn shrink_follows_comparison() {
        let bracket = Bracket::new([0.0, 4.0]).expect("valid bracket");
        let probes = [1.5, 2.5];

        assert_eq!(
            Probed::LeftHigher.shrink(bracket, probes).as_array(),
            [1.5, 4.0]
        );
        assert_eq!(
            Probed::RightHigher.shrink(bracket, probes).as_array(),
            [0.0, 2.5]
        );
        assert_eq!(Probed::Tied.shrink(bracket, probes).as_array(), [1.5, 2.5]);
    }

    #[test]
    fn walk_counts_updates_and_honors_stop() {
        let problem = problem();
        let mut observer = |event: &Event| (event.iter() == 1).then_some(Action::StopEarly);

        let (mut walk, flow) =
            BracketWalk::start(Method::Dichotomy, problem.bracket(), &mut observer);
        assert_eq!(flow, ControlFlow::Continue(()));

        let next = walk.bracket().shrink_right(2.0);
        assert_eq!(walk.advance(next), ControlFlow::Break(()));
        assert_eq!(walk.iters(), 1);

        let solution = walk.finish(&problem, Status::StoppedByObserver);
        assert_eq!(solution.x, 1.0);
        assert_eq!(solution.y, 0.0);
        assert_eq!(solution.iters, 1);
    }
}

use std::ops::ControlFlow;

use tracing::warn;

use extremum_core::{Observer, SearchProblem};

use crate::{
    Action, Error, Event, Method, Solution, Status,
    strategy::{BracketWalk, Probed, Strategy},
};

/// Probe-pair interval halving.
///
/// Each step probes `delta / 2` either side of the midpoint and keeps the
/// part of the bracket on the lower side; a tie keeps only the span between
/// the probes. Stops once the width is at most `2 * eps`.
///
/// The width shrinks toward `delta`, so a search with `delta >= 2 * eps`
/// is rejected as non-convergent before any evaluation. So is a step whose
/// probes round to the same point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dichotomy;

impl Strategy for Dichotomy {
    const METHOD: Method = Method::Dichotomy;

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
        let (delta, tol) = (config.delta(), 2.0 * config.eps());

        let (mut walk, flow) = BracketWalk::start(Self::METHOD, problem.bracket(), observer);
        if flow.is_break() {
            return Ok(walk.finish(problem, Status::StoppedByObserver));
        }

        if walk.bracket().width() > tol && delta >= tol {
            let err = walk.non_convergence();
            warn!(delta, eps = config.eps(), "probe offset keeps dichotomy above tolerance");
            return Err(err);
        }

        while walk.bracket().width() > tol {
            if walk.iters() >= config.max_iters() {
                let err = walk.non_convergence();
                warn!(%err, "dichotomy hit the iteration cap");
                return Err(err);
            }

            let bracket = walk.bracket();
            let mid = bracket.midpoint();
            let probes = [mid - 0.5 * delta, mid + 0.5 * delta];
            if probes[0] >= probes[1] {
                let err = walk.non_convergence();
                warn!(delta, mid, "probe offset vanishes at this magnitude");
                return Err(err);
            }
            let next = Probed::compare(problem, probes).shrink(bracket, probes);

            if let ControlFlow::Break(()) = walk.advance(next) {
                return Ok(walk.finish(problem, Status::StoppedByObserver));
            }
        }

        Ok(walk.finish(problem, Status::Converged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_abs_diff_eq;
    use extremum_core::Config;

    use crate::{Trace, TraceRecorder};

    fn parabola(x: f64) -> f64 {
        (x - 2.0).powi(2)
    }

    #[test]
    fn finds_parabola_minimum() {
        let problem =
            SearchProblem::new(parabola, [0.0, 5.0], Config::default()).expect("valid problem");

        let solution = Dichotomy.search(&problem, &mut ()).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_abs_diff_eq!(solution.x, 2.0, epsilon = 2e-6);
        assert_abs_diff_eq!(solution.y, 0.0, epsilon = 1e-11);
    }

    #[test]
    fn final_width_within_twice_eps_and_never_widens() {
        let config = Config::new(1e-4, 1e-3, 25, 1000).expect("valid config");
        let problem = SearchProblem::new(parabola, [-3.0, 7.0], config).expect("valid problem");

        let mut inner = ();
        let mut recorder = TraceRecorder::new(Method::Dichotomy, &mut inner);
        let solution = Dichotomy
            .search(&problem, &mut recorder)
            .expect("should converge");
        let Trace::Brackets(trace) = recorder.into_trace() else {
            panic!("expected a bracket trace");
        };

        let brackets = trace.brackets();
        assert_eq!(brackets.len(), solution.iters + 1);
        assert_eq!(brackets[0].as_array(), [-3.0, 7.0]);
        assert!(brackets.windows(2).all(|w| w[1].width() <= w[0].width()));

        let last = brackets.last().expect("non-empty trace");
        assert!(last.width() <= 2e-3);
        assert!(last.contains(solution.x));
    }

    #[test]
    fn tie_keeps_span_between_probes() {
        // Constant objective: every comparison ties.
        let config = Config::new(0.5, 0.5, 25, 1000).expect("valid config");
        let problem = SearchProblem::new(|_| 1.0, [0.0, 4.0], config).expect("valid problem");

        let mut brackets = Vec::new();
        let mut observer = |event: &Event| {
            if let Event::Bracket { bracket, .. } = event {
                brackets.push(bracket.as_array());
            }
            None
        };
        let solution = Dichotomy
            .search(&problem, &mut observer)
            .expect("should converge");

        assert_eq!(brackets, vec![[0.0, 4.0], [1.75, 2.25]]);
        assert_eq!(solution.x, 2.0);
    }

    #[test]
    fn degenerate_interval_returns_point() {
        let problem =
            SearchProblem::new(parabola, [3.0, 3.0], Config::default()).expect("valid problem");

        let solution = Dichotomy.search(&problem, &mut ()).expect("degenerate is fine");

        assert_eq!(solution.x, 3.0);
        assert_eq!(solution.y, 1.0);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn probe_offset_too_wide_is_non_convergent() {
        let evaluations = Cell::new(0);
        let counting = |x: f64| {
            evaluations.set(evaluations.get() + 1);
            parabola(x)
        };
        let config = Config::new(1e-3, 1e-4, 25, 1000).expect("valid config");
        let problem = SearchProblem::new(counting, [0.0, 5.0], config).expect("valid problem");

        let result = Dichotomy.search(&problem, &mut ());
        assert!(matches!(
            result,
            Err(Error::NonConvergence {
                method: Method::Dichotomy,
                iters: 0,
                ..
            })
        ));
        assert_eq!(evaluations.get(), 0);
    }

    #[test]
    fn probes_rounding_together_is_non_convergent() {
        let evaluations = Cell::new(0);
        let counting = |x: f64| {
            evaluations.set(evaluations.get() + 1);
            parabola(x)
        };
        let config = Config::new(1e-20, 1e-20, 25, 1000).expect("valid config");
        let problem = SearchProblem::new(counting, [0.0, 5.0], config).expect("valid problem");

        let result = Dichotomy.search(&problem, &mut ());

        assert!(matches!(
            result,
            Err(Error::NonConvergence { iters: 0, width, .. }) if width > 4.9
        ));
        assert_eq!(evaluations.get(), 0);
    }

    #[test]
    fn iteration_cap_reports_non_convergence() {
        let config = Config::new(1e-9, 1e-8, 25, 5).expect("valid config");
        let problem = SearchProblem::new(parabola, [0.0, 5.0], config).expect("valid problem");

        let result = Dichotomy.search(&problem, &mut ());

        assert!(matches!(
            result,
            Err(Error::NonConvergence { iters: 5, width, .. }) if width > 2e-8
        ));
    }

    #[test]
    fn observer_can_stop_early() {
        let problem =
            SearchProblem::new(parabola, [0.0, 5.0], Config::default()).expect("valid problem");
        let mut observer = |event: &Event| (event.iter() == 3).then_some(Action::StopEarly);

        let solution = Dichotomy
            .search(&problem, &mut observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
    }
}

use std::ops::ControlFlow;

use tracing::warn;

use extremum_core::{Observer, SearchProblem};

use crate::{
    Action, Error, Event, Method, Solution, Status,
    strategy::{BracketWalk, Strategy},
};

/// The inverse golden ratio: (√5 − 1) / 2.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Golden-section search.
///
/// Probes sit at `right - τ·width` and `left + τ·width` with `τ = 1/φ`, so
/// every step scales the bracket by `τ`. Unlike [`Dichotomy`](crate::Dichotomy)
/// there is no separate tie rule: unless the left probe is strictly higher,
/// the right part of the bracket is dropped. Stops once the width is at most
/// `eps`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldenSection;

impl Strategy for GoldenSection {
    const METHOD: Method = Method::GoldenSection;

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

        let (mut walk, flow) = BracketWalk::start(Self::METHOD, problem.bracket(), observer);
        if flow.is_break() {
            return Ok(walk.finish(problem, Status::StoppedByObserver));
        }

        while walk.bracket().width() > config.eps() {
            if walk.iters() >= config.max_iters() {
                let err = walk.non_convergence();
                warn!(%err, "golden section hit the iteration cap");
                return Err(err);
            }

            let bracket = walk.bracket();
            let [l, r] = bracket.probes(INV_PHI);
            let next = if problem.eval(l) > problem.eval(r) {
                bracket.shrink_left(l)
            } else {
                bracket.shrink_right(r)
            };

            if let ControlFlow::Break(()) = walk.advance(next) {
                return Ok(walk.finish(problem, Status::StoppedByObserver));
            }
        }

        Ok(walk.finish(problem, Status::Converged))
    }
}

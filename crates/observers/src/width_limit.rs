use extremum_core::Observer;

use crate::traits::{CanStopEarly, HasBracket};

/// Stops a bracketing search once the bracket width drops to `width` or below.
///
/// Useful for capping the work of a fixed-budget strategy such as Fibonacci
/// search. Events without a bracket are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthLimit {
    width: f64,
}

impl WidthLimit {
    /// Creates an observer that stops at `width`.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl<E, A> Observer<E, A> for WidthLimit
where
    E: HasBracket,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let bracket = event.bracket()?;
        (bracket.width() <= self.width).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use extremum_solvers::{Method, Solver, Status};

    #[test]
    fn stops_fibonacci_search_once_narrow() {
        let mut solver = Solver::new(|x: f64| (x - 2.0).powi(2), [0.0, 5.0]).expect("valid solver");

        let solution = solver
            .solve_observed(Method::Fibonacci, true, WidthLimit::new(0.1))
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.iters < 24);
        assert_abs_diff_eq!(solution.x, 2.0, epsilon = 0.05);

        let rows = solution.trace.expect("trace requested").rows();
        let [a, b] = rows[rows.len() - 1];
        assert!(b - a <= 0.1);
        let [a, b] = rows[rows.len() - 2];
        assert!(b - a > 0.1);
    }

    #[test]
    fn ignores_samples() {
        let mut solver = Solver::new(|x: f64| x * x, [-1.0, 1.0]).expect("valid solver");

        let solution = solver
            .solve_observed(Method::RandomSearch, false, WidthLimit::new(10.0))
            .expect("should complete");

        assert_eq!(solution.status, Status::Completed);
    }
}

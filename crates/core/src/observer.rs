/// Watches a search as it narrows and may ask it to stop.
///
/// A strategy reports each bracket or sample as an event `E` and calls
/// [`Observer::observe`] before taking its next step. Returning `Some(action)`
/// asks the strategy to act on it (for example, to stop with its current best
/// estimate); returning `None` lets it carry on.
///
/// Trace recording, logging and width or budget limits are all observers, so
/// any mix of them can be layered over one search without touching the
/// strategy.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that watches nothing.
///
/// # Example
///
/// ```rust
/// use extremum_core::{Bracket, Observer};
///
/// struct Narrowest(f64);
///
/// impl Observer<Bracket, ()> for Narrowest {
///     fn observe(&mut self, bracket: &Bracket) -> Option<()> {
///         self.0 = self.0.min(bracket.width());
///         None
///     }
/// }
///
/// let mut narrowest = Narrowest(f64::INFINITY);
/// let bracket = Bracket::new([0.0, 0.5]).unwrap();
/// assert!(narrowest.observe(&bracket).is_none());
/// assert_eq!(narrowest.0, 0.5);
/// ```
pub trait Observer<E, A> {
    /// Sees one event and optionally returns an action for the strategy.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

use tracing::debug;

use extremum_core::Observer;

use crate::traits::{HasBracket, HasSample};

/// Observer that logs every event at `debug` level and never intervenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver {
    events: usize,
}

impl LogObserver {
    /// Creates a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many events have been logged.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasBracket + HasSample,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        if let Some(bracket) = event.bracket() {
            debug!(
                step = self.events,
                left = bracket.left(),
                right = bracket.right(),
                width = bracket.width(),
                "bracket"
            );
        }
        if let Some(point) = event.sample() {
            debug!(step = self.events, x = point.x, y = point.y, "sample");
        }
        None
    }
}

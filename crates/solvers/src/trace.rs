use extremum_core::{Bracket, Observer, SamplePoint};

use crate::{Action, Event, Method};

/// Every bracket of one search, from the initial interval to the final one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BracketTrace(Vec<Bracket>);

impl BracketTrace {
    /// Appends a bracket.
    pub fn push(&mut self, bracket: Bracket) {
        self.0.push(bracket);
    }

    /// Returns the recorded brackets in order.
    #[must_use]
    pub fn brackets(&self) -> &[Bracket] {
        &self.0
    }

    /// Returns the number of recorded brackets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Every sample of one random search, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTrace(Vec<SamplePoint>);

impl SampleTrace {
    /// Appends a sample.
    pub fn push(&mut self, point: SamplePoint) {
        self.0.push(point);
    }

    /// Returns the recorded samples in order.
    #[must_use]
    pub fn samples(&self) -> &[SamplePoint] {
        &self.0
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The recorded progress of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    /// Brackets from a bracketing strategy.
    Brackets(BracketTrace),

    /// Samples from random search.
    Samples(SampleTrace),
}

impl Trace {
    /// Returns an empty trace of the kind `method` produces.
    #[must_use]
    pub fn for_method(method: Method) -> Self {
        if method.is_bracketing() {
            Self::Brackets(BracketTrace::default())
        } else {
            Self::Samples(SampleTrace::default())
        }
    }

    /// Returns the column headers for tabular display.
    #[must_use]
    pub fn headers(&self) -> [&'static str; 2] {
        match self {
            Self::Brackets(_) => ["a", "b"],
            Self::Samples(_) => ["x", "y"],
        }
    }

    /// Returns one row per step, indexed by step number.
    #[must_use]
    pub fn rows(&self) -> Vec<[f64; 2]> {
        match self {
            Self::Brackets(trace) => trace.brackets().iter().map(Bracket::as_array).collect(),
            Self::Samples(trace) => trace.samples().iter().map(SamplePoint::as_array).collect(),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Brackets(trace) => trace.len(),
            Self::Samples(trace) => trace.len(),
        }
    }

    /// Returns true if the trace has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Observer that records a trace and forwards each event to an inner observer.
///
/// Events of the wrong kind for the trace are forwarded but not recorded.
pub struct TraceRecorder<'o, Obs> {
    trace: Trace,
    inner: &'o mut Obs,
}

impl<'o, Obs> TraceRecorder<'o, Obs>
where
    Obs: Observer<Event, Action>,
{
    /// Creates a recorder for a search run with `method`.
    pub fn new(method: Method, inner: &'o mut Obs) -> Self {
        Self {
            trace: Trace::for_method(method),
            inner,
        }
    }

    /// Consumes the recorder and returns the trace.
    #[must_use]
    pub fn into_trace(self) -> Trace {
        self.trace
    }
}

impl<Obs> Observer<Event, Action> for TraceRecorder<'_, Obs>
where
    Obs: Observer<Event, Action>,
{
    fn observe(&mut self, event: &Event) -> Option<Action> {
        match (&mut self.trace, event) {
            (Trace::Brackets(trace), Event::Bracket { bracket, .. }) => trace.push(*bracket),
            (Trace::Samples(trace), Event::Sample { point, .. }) => trace.push(*point),
            _ => {}
        }
        self.inner.observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket(a: f64, b: f64) -> Bracket {
        Bracket::new([a, b]).expect("valid bracket")
    }

    #[test]
    fn records_brackets_and_forwards() {
        let mut forwarded = 0;
        let mut inner = |_: &Event| {
            forwarded += 1;
            None
        };

        let mut recorder = TraceRecorder::new(Method::Dichotomy, &mut inner);
        for (iter, b) in [bracket(0.0, 4.0), bracket(1.0, 4.0)].into_iter().enumerate() {
            assert_eq!(recorder.observe(&Event::Bracket { iter, bracket: b }), None);
        }
        let trace = recorder.into_trace();

        assert_eq!(forwarded, 2);
        assert_eq!(trace.headers(), ["a", "b"]);
        assert_eq!(trace.rows(), vec![[0.0, 4.0], [1.0, 4.0]]);
    }

    #[test]
    fn records_samples() {
        let mut inner = ();
        let mut recorder = TraceRecorder::new(Method::RandomSearch, &mut inner);
        recorder.observe(&Event::Sample {
            iter: 1,
            point: SamplePoint::new(0.5, 0.25),
        });
        // A bracket event does not belong in a sample trace.
        recorder.observe(&Event::Bracket {
            iter: 0,
            bracket: bracket(0.0, 1.0),
        });

        let trace = recorder.into_trace();
        assert_eq!(trace.headers(), ["x", "y"]);
        assert_eq!(trace.rows(), vec![[0.5, 0.25]]);
    }

    #[test]
    fn passes_through_inner_action() {
        let mut inner = |_: &Event| Some(Action::StopEarly);
        let mut recorder = TraceRecorder::new(Method::Fibonacci, &mut inner);

        let action = recorder.observe(&Event::Bracket {
            iter: 0,
            bracket: bracket(0.0, 1.0),
        });

        assert_eq!(action, Some(Action::StopEarly));
        assert_eq!(recorder.into_trace().len(), 1);
    }
}

//! Step observers: the hook a search calls after every expansion and every
//! path-replay step.
//!
//! An observer returns `true` to let the search continue and `false` to
//! cancel it. The search calls it eagerly on the caller's thread, so an
//! observer that redraws or sleeps slows the search down accordingly.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pathviz_core::Pos;

/// What the search just did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// A frontier cell was expanded (its neighbours were processed).
    Expanded(Pos),
    /// A cell was tagged as part of the reconstructed path.
    Path(Pos),
}

impl Step {
    #[inline]
    pub fn pos(self) -> Pos {
        match self {
            Self::Expanded(p) | Self::Path(p) => p,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expanded(p) => write!(f, "expand {p}"),
            Self::Path(p) => write!(f, "path {p}"),
        }
    }
}

/// Callback invoked after every search step.
pub trait StepObserver<G: ?Sized> {
    /// Observe `step` with read access to the graph. Return `false` to
    /// request cancellation.
    fn on_step(&mut self, graph: &G, step: Step) -> bool;
}

impl<G: ?Sized, F: FnMut(&G, Step) -> bool> StepObserver<G> for F {
    #[inline]
    fn on_step(&mut self, graph: &G, step: Step) -> bool {
        self(graph, step)
    }
}

/// Observer that ignores every step and never cancels.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl<G: ?Sized> StepObserver<G> for NoopObserver {
    #[inline]
    fn on_step(&mut self, _graph: &G, _step: Step) -> bool {
        true
    }
}

/// Observer that records every step, optionally cancelling after a fixed
/// number of them.
#[derive(Clone, Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
    limit: Option<usize>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the search once `limit` steps have been recorded.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            steps: Vec::new(),
            limit: Some(limit),
        }
    }

    /// All recorded steps in call order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Positions expanded, in expansion order.
    pub fn expanded(&self) -> Vec<Pos> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                Step::Expanded(p) => Some(*p),
                Step::Path(_) => None,
            })
            .collect()
    }

    /// Positions replayed as path, in replay order (end to start).
    pub fn path(&self) -> Vec<Pos> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                Step::Path(p) => Some(*p),
                Step::Expanded(_) => None,
            })
            .collect()
    }
}

impl<G: ?Sized> StepObserver<G> for StepRecorder {
    fn on_step(&mut self, _graph: &G, step: Step) -> bool {
        self.steps.push(step);
        self.limit.is_none_or(|limit| self.steps.len() < limit)
    }
}

/// Wraps another observer and also polls a shared quit flag.
///
/// The flag can be raised from anywhere (a signal handler, another thread,
/// a UI callback); the search stops at its next step.
#[derive(Clone, Debug)]
pub struct CancelFlag<O> {
    flag: Arc<AtomicBool>,
    inner: O,
}

impl<O> CancelFlag<O> {
    pub fn new(flag: Arc<AtomicBool>, inner: O) -> Self {
        Self { flag, inner }
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl<G: ?Sized, O: StepObserver<G>> StepObserver<G> for CancelFlag<O> {
    fn on_step(&mut self, graph: &G, step: Step) -> bool {
        if self.is_cancelled() {
            return false;
        }
        self.inner.on_step(graph, step) && !self.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_limit() {
        let mut rec = StepRecorder::with_limit(2);
        assert!(StepObserver::<()>::on_step(&mut rec, &(), Step::Expanded(Pos::ZERO)));
        assert!(!StepObserver::<()>::on_step(&mut rec, &(), Step::Path(Pos::new(0, 1))));
        assert_eq!(rec.expanded(), vec![Pos::ZERO]);
        assert_eq!(rec.path(), vec![Pos::new(0, 1)]);
    }

    #[test]
    fn cancel_flag_stops_even_if_inner_continues() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut obs = CancelFlag::new(Arc::clone(&flag), NoopObserver);
        assert!(StepObserver::<()>::on_step(&mut obs, &(), Step::Expanded(Pos::ZERO)));
        flag.store(true, Ordering::Relaxed);
        assert!(!StepObserver::<()>::on_step(&mut obs, &(), Step::Expanded(Pos::ZERO)));
    }

    #[test]
    fn closures_are_observers() {
        let mut n = 0;
        let mut obs = |_: &(), _: Step| {
            n += 1;
            n < 3
        };
        assert!(obs.on_step(&(), Step::Expanded(Pos::ZERO)));
        assert!(obs.on_step(&(), Step::Expanded(Pos::ZERO)));
        assert!(!obs.on_step(&(), Step::Expanded(Pos::ZERO)));
    }
}

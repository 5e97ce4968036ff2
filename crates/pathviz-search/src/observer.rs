use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pathviz_core::Grid;

/// What a [`StepObserver`] wants the search to do next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Progress {
    #[default]
    Continue,
    /// Abort the run; it returns `false` without finishing the backtrace.
    Cancel,
}

impl Progress {
    #[inline]
    pub fn is_cancel(self) -> bool {
        self == Self::Cancel
    }
}

/// Receives control after every visible unit of search progress.
///
/// Searches call [`on_step`](Self::on_step) once after each expansion and
/// once per cell revealed by the backtrace. This is the only point at which
/// a run yields, so hosts redraw and poll their input here.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid) -> Progress;
}

impl<F: FnMut(&Grid) -> Progress> StepObserver for F {
    #[inline]
    fn on_step(&mut self, grid: &Grid) -> Progress {
        self(grid)
    }
}

/// Observer that never cancels and draws nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _grid: &Grid) -> Progress {
        Progress::Continue
    }
}

/// A cooperative cancellation flag shared between a host and a running
/// search.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    done: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }

    /// Clear a previous request so the flag can guard another run.
    #[inline]
    pub fn reset(&self) {
        self.done.store(false, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Wrap `inner` so the flag is checked right after each of its steps.
    pub fn guard<O: StepObserver>(&self, inner: O) -> Guarded<O> {
        Guarded {
            inner,
            flag: self.clone(),
        }
    }
}

/// An observer paired with a [`CancelFlag`]. See [`CancelFlag::guard`].
#[derive(Debug)]
pub struct Guarded<O> {
    inner: O,
    flag: CancelFlag,
}

impl<O: StepObserver> StepObserver for Guarded<O> {
    fn on_step(&mut self, grid: &Grid) -> Progress {
        let progress = self.inner.on_step(grid);
        if self.flag.is_cancelled() {
            return Progress::Cancel;
        }
        progress
    }
}

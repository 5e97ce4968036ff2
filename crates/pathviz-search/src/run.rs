//! State shared by every strategy during a single run.

use std::collections::HashMap;

use pathviz_core::{CellState, Grid, Pos};

use crate::error::SearchError;
use crate::observer::{Progress, StepObserver};

/// Summary of a finished (or cancelled) run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// End was reached and the path fully marked.
    pub found: bool,
    /// The observer asked to stop.
    pub cancelled: bool,
    /// Cells taken off the frontier and expanded.
    pub expanded: usize,
    /// Edge count of the marked path, when found.
    pub path_len: Option<usize>,
}

// ---------------------------------------------------------------------------
// Heap entries for the priority-driven strategies
// ---------------------------------------------------------------------------

/// Frontier entry ordered by `(key, seq)`, smallest first.
///
/// `seq` is an insertion counter: among equal keys the entry discovered
/// first is served first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ranked {
    pub(crate) key: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel g-score for cells not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// One search invocation: the grid being painted, the observer, and the
/// predecessor map used by the backtrace. Dropped when the run returns.
pub(crate) struct Run<'a, O: StepObserver + ?Sized> {
    pub(crate) grid: &'a mut Grid,
    observer: &'a mut O,
    pub(crate) start: Pos,
    pub(crate) end: Pos,
    pub(crate) came_from: HashMap<Pos, Pos>,
    pub(crate) expanded: usize,
    // shared scratch buffer for neighbor queries
    nbuf: Vec<Pos>,
}

impl<'a, O: StepObserver + ?Sized> Run<'a, O> {
    pub(crate) fn new(grid: &'a mut Grid, observer: &'a mut O, start: Pos, end: Pos) -> Self {
        Self {
            grid,
            observer,
            start,
            end,
            came_from: HashMap::new(),
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Flat index of `p`; callers only pass positions taken from the grid.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> usize {
        self.grid.index(p).unwrap_or(usize::MAX)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.grid.len()
    }

    /// Take the cached neighbours of `p`. Hand the buffer back with
    /// [`put_neighbors`](Self::put_neighbors).
    pub(crate) fn take_neighbors(&mut self, p: Pos) -> Vec<Pos> {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend_from_slice(self.grid.cached_neighbors(p));
        nbuf
    }

    pub(crate) fn put_neighbors(&mut self, nbuf: Vec<Pos>) {
        self.nbuf = nbuf;
    }

    /// Whether `p` keeps its marker during the run: the run's own endpoints
    /// and any start or end the grid has recorded.
    fn holds_marker(&self, p: Pos) -> bool {
        p == self.start || p == self.end || self.grid.state(p).is_some_and(|s| s.is_endpoint())
    }

    /// Mark a newly discovered cell as open. Endpoints keep their marker.
    pub(crate) fn discover(&mut self, p: Pos) -> Result<(), SearchError> {
        if !self.holds_marker(p) {
            self.grid.set_state(p, CellState::Open)?;
        }
        Ok(())
    }

    /// Close an expanded cell and hand control to the observer.
    pub(crate) fn expanded(&mut self, p: Pos) -> Result<Progress, SearchError> {
        if !self.holds_marker(p) {
            self.grid.set_state(p, CellState::Closed)?;
        }
        self.expanded += 1;
        log::trace!("search: expanded {p} ({} so far)", self.expanded);
        Ok(self.observer.on_step(&*self.grid))
    }

    /// Outcome for a run whose frontier ran dry.
    pub(crate) fn exhausted(&self) -> SearchOutcome {
        SearchOutcome {
            found: false,
            cancelled: false,
            expanded: self.expanded,
            path_len: None,
        }
    }

    /// Outcome for a run the observer stopped.
    pub(crate) fn cancelled(&self) -> SearchOutcome {
        log::info!("search: cancelled after {} expansions", self.expanded);
        SearchOutcome {
            found: false,
            cancelled: true,
            expanded: self.expanded,
            path_len: None,
        }
    }

    /// Walk `came_from` back from end, marking each intermediate cell as
    /// path and stepping the observer once per cell, then make the run's
    /// endpoints the grid's start and end.
    ///
    /// A path cell still showing a previously recorded endpoint is painted
    /// only once that endpoint has been moved.
    pub(crate) fn backtrace(&mut self) -> Result<SearchOutcome, SearchError> {
        let mut edges = 0;
        let mut held = Vec::new();
        let mut current = self.end;
        while let Some(&prev) = self.came_from.get(&current) {
            edges += 1;
            if prev == self.start {
                break;
            }
            if self.holds_marker(prev) {
                held.push(prev);
            } else {
                self.grid.set_state(prev, CellState::Path)?;
            }
            if self.observer.on_step(&*self.grid).is_cancel() {
                return Ok(self.cancelled());
            }
            current = prev;
        }
        self.grid.set_endpoints(self.start, self.end)?;
        for p in held {
            self.grid.set_state(p, CellState::Path)?;
        }
        Ok(SearchOutcome {
            found: true,
            cancelled: false,
            expanded: self.expanded,
            path_len: Some(edges),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn ranked_pops_lowest_key_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(Ranked { key: 5, seq: 0, idx: 0 });
        heap.push(Ranked { key: 3, seq: 2, idx: 1 });
        heap.push(Ranked { key: 3, seq: 1, idx: 2 });
        heap.push(Ranked { key: 4, seq: 3, idx: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.idx)).collect();
        assert_eq!(order, vec![2, 1, 3, 0]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let outcome = SearchOutcome {
            found: true,
            cancelled: false,
            expanded: 12,
            path_len: Some(4),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}

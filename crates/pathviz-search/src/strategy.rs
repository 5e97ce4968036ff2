use std::fmt;

use pathviz_core::{Grid, Pos};

use crate::astar::astar;
use crate::best_first::best_first;
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::error::{Endpoint, SearchError};
use crate::observer::StepObserver;
use crate::run::{Run, SearchOutcome};

/// The interchangeable search algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    AStar,
    BreadthFirst,
    DepthFirst,
    BestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Self::AStar,
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::BestFirst,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
            Self::BestFirst => "best-first",
        }
    }

    /// Search from `start` to `end`, painting the grid as it goes.
    ///
    /// Returns `Ok(true)` once the path has been marked, `Ok(false)` if `end`
    /// is unreachable or the observer cancelled.
    pub fn run<O: StepObserver + ?Sized>(
        self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        observer: &mut O,
    ) -> Result<bool, SearchError> {
        Ok(self.run_with_stats(grid, start, end, observer)?.found)
    }

    /// Like [`run`](Self::run) but returns the full [`SearchOutcome`].
    ///
    /// Preconditions are checked before the grid is touched: distinct
    /// in-bounds endpoints and fresh neighbour caches.
    pub fn run_with_stats<O: StepObserver + ?Sized>(
        self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        observer: &mut O,
    ) -> Result<SearchOutcome, SearchError> {
        if start == end {
            return Err(SearchError::SameEndpoints(start));
        }
        for (which, pos) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !grid.contains(pos) {
                return Err(SearchError::OutOfBounds { which, pos });
            }
        }
        if grid.neighbors_stale() {
            return Err(SearchError::StaleNeighbors);
        }

        log::debug!("search: {self} from {start} to {end}");
        let mut run = Run::new(grid, observer, start, end);
        let outcome = match self {
            Self::AStar => astar(&mut run)?,
            Self::BreadthFirst => bfs(&mut run)?,
            Self::DepthFirst => dfs(&mut run)?,
            Self::BestFirst => best_first(&mut run)?,
        };
        log::debug!(
            "search: {self} {} after {} expansions, path length {:?}",
            if outcome.found {
                "found end"
            } else if outcome.cancelled {
                "cancelled"
            } else {
                "exhausted"
            },
            outcome.expanded,
            outcome.path_len
        );
        Ok(outcome)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `strategy` between the grid's own start and end cells.
pub fn search<O: StepObserver + ?Sized>(
    strategy: Strategy,
    grid: &mut Grid,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError> {
    let start = grid
        .start()
        .ok_or(SearchError::MissingEndpoint(Endpoint::Start))?;
    let end = grid.end().ok_or(SearchError::MissingEndpoint(Endpoint::End))?;
    strategy.run_with_stats(grid, start, end, observer)
}

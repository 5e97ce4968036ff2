use std::fmt;

use thiserror::Error;

use pathviz_core::{GridError, Pos};

/// Which end of a search an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Precondition failures. A run that returns one of these has not touched
/// the grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("start and end are the same cell {0}")]
    SameEndpoints(Pos),
    #[error("{which} {pos} is outside the grid")]
    OutOfBounds { which: Endpoint, pos: Pos },
    #[error("the grid has no {0} cell")]
    MissingEndpoint(Endpoint),
    #[error("neighbour caches are stale; recompute them before searching")]
    StaleNeighbors,
    #[error(transparent)]
    Grid(#[from] GridError),
}

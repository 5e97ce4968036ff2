//! Step-by-step grid searches for the pathviz visualizer.
//!
//! Four strategies share one contract ([`Strategy::run`]):
//!
//! - **A\***: Manhattan heuristic, shortest path
//! - **Breadth-first**: FIFO frontier, shortest path
//! - **Depth-first**: stack frontier, some path
//! - **Best-first**: greedy on the heuristic, some path
//!
//! A run paints the [`Grid`](pathviz_core::Grid) as it explores: discovered
//! cells become `Open`, expanded cells `Closed`, and on success the path
//! from end back to start becomes `Path`. After every expansion (and every
//! backtraced cell) the run hands control to a [`StepObserver`], which may
//! redraw and may cancel.

mod astar;
mod best_first;
mod bfs;
mod dfs;
mod error;
mod observer;
mod run;
mod strategy;

pub use error::{Endpoint, SearchError};
pub use observer::{CancelFlag, Guarded, NoopObserver, Progress, StepObserver};
pub use run::{SearchOutcome, UNREACHABLE};
pub use strategy::{Strategy, search};

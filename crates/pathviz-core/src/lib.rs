//! **pathviz-core**: the board a pathfinding visualizer draws on.
//!
//! This crate provides grid coordinates, cells with a categorical state,
//! the square [`Grid`] with its single-start/single-end bookkeeping and
//! neighbour caches, random barrier generation, and the session config.
//! Searches live in `pathviz-search`; drawing lives in the front-end.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;

pub use cell::{Cell, CellState};
pub use config::VizConfig;
pub use error::{ConfigError, GridError};
pub use geom::{Pos, manhattan};
pub use grid::Grid;
pub use mapgen::DEFAULT_BARRIER_PROBABILITY;

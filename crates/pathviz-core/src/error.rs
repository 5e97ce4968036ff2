use thiserror::Error;

use crate::cell::CellState;
use crate::geom::Pos;

/// Errors raised by [`Grid`](crate::Grid) construction and edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Zero rows or a zero pixel width.
    #[error("invalid grid dimensions: {rows} rows, {pixel_width}px wide")]
    InvalidDimensions { rows: usize, pixel_width: u32 },
    #[error("position {pos} is outside a {rows}x{rows} grid")]
    OutOfBounds { pos: Pos, rows: usize },
    /// The edit would overwrite a start or end cell.
    #[error("cell {pos} is already {state:?}")]
    Occupied { pos: Pos, state: CellState },
    #[error("barrier probability {0} is not within [0, 1]")]
    InvalidProbability(f64),
    /// A text layout whose lines do not form a square.
    #[error("layout is not square: line {line} has {width} cells, expected {rows}")]
    NotSquare {
        line: usize,
        width: usize,
        rows: usize,
    },
    #[error("layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Pos },
    #[error("layout has more than one {0:?} cell")]
    DuplicateEndpoint(CellState),
}

/// Errors raised while loading or validating a [`VizConfig`](crate::VizConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config: {0}")]
    Invalid(#[from] GridError),
    #[cfg(feature = "serde")]
    #[error("config: malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

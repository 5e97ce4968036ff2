//! The [`Cell`] type: one grid unit with a categorical [`CellState`].

use crate::geom::Pos;
use crate::grid::Grid;

/// What a cell currently represents.
///
/// User edits produce `Barrier`, `Start` and `End`; a search run produces
/// `Open`, `Closed` and `Path`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered, waiting in the frontier.
    Open,
    /// Expanded.
    Closed,
    Path,
}

impl CellState {
    /// Whether this state was produced by a search run.
    #[inline]
    pub const fn is_search_overlay(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }

    /// Whether this state marks one of the two endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// A single grid unit.
///
/// The cached neighbour list is only meaningful after
/// [`Grid::recompute_all_neighbors`](crate::Grid::recompute_all_neighbors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    row: i32,
    col: i32,
    size: u32,
    state: CellState,
    neighbors: Vec<Pos>,
}

impl Cell {
    /// Create an empty cell at (`row`, `col`), `size` pixels wide.
    pub fn new(row: i32, col: i32, size: u32) -> Self {
        Self {
            row,
            col,
            size,
            state: CellState::Empty,
            neighbors: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Edge length in pixels. Only used for drawing.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Top-left pixel of this cell as `(x, y)`.
    #[inline]
    pub fn origin(&self) -> (u32, u32) {
        (self.col as u32 * self.size, self.row as u32 * self.size)
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Cached orthogonal neighbours (down, up, right, left), barriers
    /// excluded.
    #[inline]
    pub fn neighbors(&self) -> &[Pos] {
        &self.neighbors
    }

    /// Recompute the cached neighbours from `grid`'s current barriers.
    ///
    /// Used for cells held outside the grid; cells owned by a grid are
    /// refreshed together by [`Grid::recompute_all_neighbors`].
    pub fn update_neighbors(&mut self, grid: &Grid) {
        self.neighbors = grid.neighbors(self.pos());
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Pos>) {
        self.neighbors = neighbors;
    }

    // --- setters ---

    pub fn reset(&mut self) {
        self.state = CellState::Empty;
    }

    pub fn make_start(&mut self) {
        self.state = CellState::Start;
    }

    pub fn make_end(&mut self) {
        self.state = CellState::End;
    }

    pub fn make_barrier(&mut self) {
        self.state = CellState::Barrier;
    }

    pub fn make_open(&mut self) {
        self.state = CellState::Open;
    }

    pub fn make_closed(&mut self) {
        self.state = CellState::Closed;
    }

    pub fn make_path(&mut self) {
        self.state = CellState::Path;
    }

    // --- predicates ---

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }
}

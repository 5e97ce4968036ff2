//! The [`Grid`] type: a square board of [`Cell`]s in row-major order.
//!
//! The grid keeps two pieces of bookkeeping next to its cells:
//!
//! - the positions of the single start and single end cell, so that placing
//!   a new start (or end) demotes the previous one;
//! - a staleness flag that every barrier edit raises. Searches read the
//!   per-cell neighbour caches, so the host must call
//!   [`recompute_all_neighbors`](Grid::recompute_all_neighbors) after edits.

use std::fmt;

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::Pos;

/// A square grid of `rows × rows` cells.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cell_size: u32,
    start: Option<Pos>,
    end: Option<Pos>,
    neighbors_stale: bool,
}

impl Grid {
    /// Create a `rows × rows` grid of empty cells spanning `pixel_width`
    /// pixels. Each cell is `pixel_width / rows` pixels wide.
    pub fn new(rows: usize, pixel_width: u32) -> Result<Self, GridError> {
        if rows == 0 || pixel_width == 0 || i32::try_from(rows).is_err() {
            return Err(GridError::InvalidDimensions { rows, pixel_width });
        }
        let cell_size = pixel_width / rows as u32;
        let mut cells = Vec::with_capacity(rows * rows);
        for row in 0..rows as i32 {
            for col in 0..rows as i32 {
                cells.push(Cell::new(row, col, cell_size));
            }
        }
        log::debug!("grid: created {rows}x{rows}, cell size {cell_size}px");
        Ok(Self {
            cells,
            rows,
            cell_size,
            start: None,
            end: None,
            neighbors_stale: true,
        })
    }

    /// Build a grid from a text layout, one line per row.
    ///
    /// `.` empty, `#` barrier, `S` start, `E` end, `o` open, `x` closed,
    /// `*` path. Surrounding whitespace is trimmed from the whole string and
    /// from each line. Every cell is one pixel wide.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let rows = lines.len();
        let mut grid = Self::new(rows, rows as u32)?;
        for (line, text) in lines.iter().enumerate() {
            let width = text.chars().count();
            if width != rows {
                return Err(GridError::NotSquare { line, width, rows });
            }
            for (col, ch) in text.chars().enumerate() {
                let pos = Pos::new(line as i32, col as i32);
                let state = match ch {
                    '.' => CellState::Empty,
                    '#' => CellState::Barrier,
                    'S' => CellState::Start,
                    'E' => CellState::End,
                    'o' => CellState::Open,
                    'x' => CellState::Closed,
                    '*' => CellState::Path,
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                };
                let taken = match state {
                    CellState::Start => grid.start,
                    CellState::End => grid.end,
                    _ => None,
                };
                if taken.is_some() {
                    return Err(GridError::DuplicateEndpoint(state));
                }
                grid.set_state(pos, state)?;
            }
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Edge length of a cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        let n = self.rows as i32;
        p.row >= 0 && p.col >= 0 && p.row < n && p.col < n
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.rows + p.col as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        Pos::new((idx / self.rows) as i32, (idx % self.rows) as i32)
    }

    fn checked_index(&self, p: Pos) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows: self.rows,
        })
    }

    /// The cell under pixel (`x`, `y`), if any.
    pub fn cell_at_pixel(&self, x: u32, y: u32) -> Option<Pos> {
        if self.cell_size == 0 {
            return None;
        }
        let p = Pos::new(
            (y / self.cell_size) as i32,
            (x / self.cell_size) as i32,
        );
        self.contains(p).then_some(p)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Pos) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The state at `p`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, p: Pos) -> Option<CellState> {
        self.cell(p).map(Cell::state)
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Count cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Position of the start cell, if placed.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// Position of the end cell, if placed.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Write `state` into cell `i`, tracking barrier changes.
    fn write(&mut self, i: usize, state: CellState) {
        let old = self.cells[i].state();
        if old != state && (old == CellState::Barrier || state == CellState::Barrier) {
            self.neighbors_stale = true;
        }
        self.cells[i].set_state(state);
    }

    /// Forget `p` as start or end before it is overwritten.
    fn release(&mut self, p: Pos) {
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
    }

    /// Set the state at `p`.
    ///
    /// `Start`, `End`, `Barrier` and `Empty` go through the matching edit
    /// method so the single-start/single-end invariant holds. Search states
    /// are written as-is.
    pub fn set_state(&mut self, p: Pos, state: CellState) -> Result<(), GridError> {
        match state {
            CellState::Start => self.set_start(p),
            CellState::End => self.set_end(p),
            CellState::Barrier => self.set_barrier(p),
            CellState::Empty => self.erase(p),
            CellState::Open | CellState::Closed | CellState::Path => {
                let i = self.checked_index(p)?;
                self.release(p);
                self.write(i, state);
                Ok(())
            }
        }
    }

    /// Make `p` the start cell. A previous start cell becomes empty.
    pub fn set_start(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        if self.end == Some(p) {
            return Err(GridError::Occupied {
                pos: p,
                state: CellState::End,
            });
        }
        if let Some(old) = self.start.filter(|&old| old != p) {
            let oi = self.checked_index(old)?;
            self.write(oi, CellState::Empty);
        }
        self.write(i, CellState::Start);
        self.start = Some(p);
        Ok(())
    }

    /// Make `p` the end cell. A previous end cell becomes empty.
    pub fn set_end(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        if self.start == Some(p) {
            return Err(GridError::Occupied {
                pos: p,
                state: CellState::Start,
            });
        }
        if let Some(old) = self.end.filter(|&old| old != p) {
            let oi = self.checked_index(old)?;
            self.write(oi, CellState::Empty);
        }
        self.write(i, CellState::End);
        self.end = Some(p);
        Ok(())
    }

    /// Make `start` and `end` the endpoints in one step, demoting whichever
    /// previous endpoints are not among them. Swapping the two is allowed.
    pub fn set_endpoints(&mut self, start: Pos, end: Pos) -> Result<(), GridError> {
        let si = self.checked_index(start)?;
        let ei = self.checked_index(end)?;
        if si == ei {
            return Err(GridError::Occupied {
                pos: end,
                state: CellState::Start,
            });
        }
        for old in [self.start, self.end].into_iter().flatten() {
            if old != start && old != end {
                let oi = self.checked_index(old)?;
                self.write(oi, CellState::Empty);
            }
        }
        self.write(si, CellState::Start);
        self.write(ei, CellState::End);
        self.start = Some(start);
        self.end = Some(end);
        Ok(())
    }

    /// Turn `p` into a barrier. Start and end cells are refused.
    pub fn set_barrier(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        let state = self.cells[i].state();
        if state.is_endpoint() {
            return Err(GridError::Occupied { pos: p, state });
        }
        self.write(i, CellState::Barrier);
        Ok(())
    }

    /// Reset `p` to empty, forgetting it as start or end.
    pub fn erase(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.release(p);
        self.write(i, CellState::Empty);
        Ok(())
    }

    /// Turn every `Open`, `Closed` and `Path` cell back to `Empty`.
    ///
    /// Start, end and barriers are kept, so user-drawn obstacles survive.
    /// Returns the number of cells cleared.
    pub fn reset_search_overlay(&mut self) -> usize {
        let mut cleared = 0;
        for cell in self.cells.iter_mut() {
            if cell.state().is_search_overlay() {
                cell.reset();
                cleared += 1;
            }
        }
        log::debug!("grid: cleared {cleared} search cells");
        cleared
    }

    /// Reset every cell to empty and forget start and end.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
        }
        self.start = None;
        self.end = None;
        self.neighbors_stale = true;
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// In-bounds, non-barrier orthogonal neighbours of `p`, in the order
    /// down, up, right, left. Computed from the current cell states.
    pub fn neighbors(&self, p: Pos) -> Vec<Pos> {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.cell(n).is_some_and(|c| !c.is_barrier()))
            .collect()
    }

    /// Refresh every cell's cached neighbour list.
    pub fn recompute_all_neighbors(&mut self) {
        let lists: Vec<Vec<Pos>> = self.cells.iter().map(|c| self.neighbors(c.pos())).collect();
        for (cell, list) in self.cells.iter_mut().zip(lists) {
            cell.set_neighbors(list);
        }
        self.neighbors_stale = false;
        log::trace!("grid: recomputed neighbours for {} cells", self.cells.len());
    }

    /// Whether barriers changed since the last
    /// [`recompute_all_neighbors`](Self::recompute_all_neighbors).
    #[inline]
    pub fn neighbors_stale(&self) -> bool {
        self.neighbors_stale
    }

    /// Cached neighbours of `p`; empty if `p` is out of bounds.
    #[inline]
    pub fn cached_neighbors(&self, p: Pos) -> &[Pos] {
        self.cell(p).map(Cell::neighbors).unwrap_or(&[])
    }
}

impl fmt::Display for Grid {
    /// Renders the layout accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % self.rows == 0 {
                writeln!(f)?;
            }
            let ch = match cell.state() {
                CellState::Empty => '.',
                CellState::Barrier => '#',
                CellState::Start => 'S',
                CellState::End => 'E',
                CellState::Open => 'o',
                CellState::Closed => 'x',
                CellState::Path => '*',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

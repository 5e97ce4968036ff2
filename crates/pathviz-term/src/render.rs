//! Terminal geometry and the state → colour mapping.
//!
//! One grid cell is drawn as [`CELL_COLS`] terminal columns by one line.
//! The grid itself thinks in pixels (`cell_size` per cell), so screen
//! coordinates are scaled into that space before hit-testing.

use crossterm::style::Color;

use pathviz_core::{CellState, Grid, Pos};

/// Terminal columns per grid cell.
pub const CELL_COLS: u16 = 2;

/// Background colour for a cell in `state`.
pub fn state_color(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
        CellState::Barrier => Color::Rgb { r: 0, g: 0, b: 0 },
        CellState::Start => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        CellState::End => Color::Rgb {
            r: 128,
            g: 0,
            b: 128,
        },
        CellState::Open => Color::Rgb { r: 0, g: 255, b: 0 },
        CellState::Closed => Color::Rgb { r: 255, g: 0, b: 0 },
        CellState::Path => Color::Rgb {
            r: 255,
            g: 255,
            b: 0,
        },
    }
}

/// Top-left terminal cell `(x, y)` where `p` is drawn.
#[inline]
pub fn pos_to_screen(p: Pos) -> (u16, u16) {
    (p.col as u16 * CELL_COLS, p.row as u16)
}

/// The grid cell under terminal cell (`x`, `y`), if any.
pub fn screen_to_pos(grid: &Grid, x: u16, y: u16) -> Option<Pos> {
    let size = grid.cell_size();
    let px = u32::from(x / CELL_COLS) * size;
    let py = u32::from(y) * size;
    grid.cell_at_pixel(px, py)
}

/// Terminal size `(columns, lines)` needed for the grid plus a status line.
pub fn required_size(grid: &Grid) -> (u16, u16) {
    let rows = u16::try_from(grid.rows()).unwrap_or(u16::MAX);
    (rows.saturating_mul(CELL_COLS), rows.saturating_add(1))
}

//! Crossterm terminal driver.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute, queue,
    style::{Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{CellState, Grid};

use crate::input::{self, Msg};
use crate::render::{pos_to_screen, required_size, state_color, CELL_COLS};

/// Draws grids to the terminal and reads input from it.
///
/// Only cells whose state changed since the previous [`draw`] are written.
///
/// [`draw`]: TerminalDriver::draw
pub struct TerminalDriver {
    out: Stdout,
    active: bool,
    shown: Vec<Option<CellState>>,
    status: String,
}

impl TerminalDriver {
    /// Create a new driver. The terminal is untouched until [`init`].
    ///
    /// [`init`]: TerminalDriver::init
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            active: false,
            shown: Vec::new(),
            status: String::new(),
        }
    }

    /// Enter raw mode and the alternate screen, and capture the mouse.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("terminal initialised");
        Ok(())
    }

    /// Fail early when the terminal cannot show the whole grid.
    pub fn check_size(&self, grid: &Grid) -> io::Result<()> {
        let (need_w, need_h) = required_size(grid);
        let (w, h) = terminal::size()?;
        if w < need_w || h < need_h {
            return Err(io::Error::other(format!(
                "terminal is {w}x{h}, a {0}x{0} grid needs {need_w}x{need_h}",
                grid.rows()
            )));
        }
        Ok(())
    }

    /// Wait up to `timeout` for the next message the visualizer cares about.
    ///
    /// A zero timeout only drains what is already queued.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Msg>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(msg) = input::translate(event::read()?) {
                if let Msg::Screen { width, height } = msg {
                    log::debug!("resize to {width}x{height}");
                    self.invalidate()?;
                }
                return Ok(Some(msg));
            }
        }
        Ok(None)
    }

    /// Forget what is on screen so the next draw repaints everything.
    pub fn invalidate(&mut self) -> io::Result<()> {
        self.shown.clear();
        self.status.clear();
        execute!(self.out, ResetColor, terminal::Clear(ClearType::All))
    }

    /// Draw the cells that changed since the last call, and the status line.
    pub fn draw(&mut self, grid: &Grid, status: &str) -> io::Result<()> {
        if self.shown.len() != grid.len() {
            self.shown = vec![None; grid.len()];
        }
        for (i, cell) in grid.iter().enumerate() {
            let state = cell.state();
            if self.shown[i] == Some(state) {
                continue;
            }
            let (x, y) = pos_to_screen(cell.pos());
            queue!(
                self.out,
                cursor::MoveTo(x, y),
                SetBackgroundColor(state_color(state)),
                Print(" ".repeat(CELL_COLS as usize))
            )?;
            self.shown[i] = Some(state);
        }
        if self.status != status {
            let y = u16::try_from(grid.rows()).unwrap_or(u16::MAX);
            queue!(
                self.out,
                ResetColor,
                cursor::MoveTo(0, y),
                terminal::Clear(ClearType::CurrentLine),
                Print(status)
            )?;
            self.status.clear();
            self.status.push_str(status);
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

impl Default for TerminalDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.close();
    }
}

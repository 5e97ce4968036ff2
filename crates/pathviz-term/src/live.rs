//! Redraw-and-poll observer used while a search runs.

use std::thread;
use std::time::Duration;

use pathviz_core::Grid;
use pathviz_search::{Progress, StepObserver};

use crate::driver::TerminalDriver;
use crate::input::{Key, Msg};

/// What a message means while a search is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    /// Stop the search and stay in the visualizer.
    Cancel,
    /// Stop the search and leave.
    Quit,
}

impl Interrupt {
    /// Grid edits and other keys are ignored during a run.
    pub fn for_msg(msg: &Msg) -> Option<Self> {
        match msg {
            Msg::KeyDown(Key::Space | Key::Escape) => Some(Interrupt::Cancel),
            Msg::KeyDown(Key::Char('q')) | Msg::Quit => Some(Interrupt::Quit),
            _ => None,
        }
    }
}

/// Draws the grid after every step, waits `delay`, then checks for input.
pub struct LiveView<'d> {
    driver: &'d mut TerminalDriver,
    delay: Duration,
    status: String,
    quit: bool,
}

impl<'d> LiveView<'d> {
    pub fn new(driver: &'d mut TerminalDriver, delay: Duration, status: String) -> Self {
        Self {
            driver,
            delay,
            status,
            quit: false,
        }
    }

    /// Whether the user asked to leave during the run.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl StepObserver for LiveView<'_> {
    fn on_step(&mut self, grid: &Grid) -> Progress {
        if let Err(err) = self.driver.draw(grid, &self.status) {
            log::error!("live view: draw failed: {err}");
            return Progress::Cancel;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        loop {
            match self.driver.poll(Duration::ZERO) {
                Ok(Some(msg)) => match Interrupt::for_msg(&msg) {
                    Some(Interrupt::Cancel) => {
                        log::info!("live view: run cancelled by user");
                        return Progress::Cancel;
                    }
                    Some(Interrupt::Quit) => {
                        self.quit = true;
                        return Progress::Cancel;
                    }
                    None => {}
                },
                Ok(None) => return Progress::Continue,
                Err(err) => {
                    log::error!("live view: poll failed: {err}");
                    return Progress::Cancel;
                }
            }
        }
    }
}

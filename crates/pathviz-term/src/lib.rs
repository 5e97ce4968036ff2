//! **pathviz-term**: crossterm front-end for the pathviz search visualizer.
//!
//! Mouse clicks paint the grid, number keys run a search, and every search
//! step is redrawn as it happens. Space or Esc cancels a running search.

pub mod app;
pub mod driver;
pub mod input;
pub mod live;
pub mod logger;
pub mod render;

use std::time::Duration;

use anyhow::Context as _;

use pathviz_core::VizConfig;

pub use app::{Action, Visualizer};
pub use driver::TerminalDriver;
pub use live::LiveView;

/// How long the idle loop waits for input before checking again.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Run the visualizer until the user quits.
pub fn run(cfg: VizConfig) -> anyhow::Result<()> {
    let mut viz = Visualizer::new(cfg).context("invalid configuration")?;
    let mut driver = TerminalDriver::new();
    driver.check_size(viz.grid())?;
    driver.init().context("cannot set up the terminal")?;
    let result = event_loop(&mut viz, &mut driver);
    driver.close();
    result
}

fn event_loop(viz: &mut Visualizer, driver: &mut TerminalDriver) -> anyhow::Result<()> {
    let delay = Duration::from_millis(viz.config().step_delay_ms);
    driver.draw(viz.grid(), viz.status())?;
    loop {
        let Some(msg) = driver.poll(IDLE_POLL)? else {
            continue;
        };
        let Some(action) = viz.action_for(&msg) else {
            // A resize wipes the screen.
            driver.draw(viz.grid(), viz.status())?;
            continue;
        };
        if action == Action::Quit {
            log::info!("quit");
            return Ok(());
        }
        let status = match action {
            Action::Search(strategy) => format!("{strategy}: searching (space to cancel)"),
            _ => viz.status().to_string(),
        };
        let mut view = LiveView::new(driver, delay, status);
        viz.apply(action, &mut view)?;
        let quit = view.quit_requested();
        driver.draw(viz.grid(), viz.status())?;
        if quit {
            log::info!("quit during search");
            return Ok(());
        }
    }
}

//! The visualizer model: grid edits and search runs driven by [`Action`]s.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use pathviz_core::{ConfigError, Grid, Pos, VizConfig};
use pathviz_search::{SearchError, SearchOutcome, StepObserver, Strategy, search};

use crate::input::{Key, MouseButton, Msg};
use crate::render;

/// Key help shown on the status line.
pub const KEY_HELP: &str = "1 BFS  2 best-first  3 A*  4 DFS  m maze  space reset  c clear  q quit";

/// Something the user asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Place start, then end, then barriers.
    Paint(Pos),
    /// Reset a cell to empty.
    Erase(Pos),
    Search(Strategy),
    /// Empty the whole grid.
    Clear,
    /// Remove the search overlay, keeping barriers and endpoints.
    ResetOverlay,
    /// Scatter random barriers.
    Maze,
    Quit,
}

impl Action {
    /// The action bound to `key`, outside of a running search.
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('1') => Some(Action::Search(Strategy::BreadthFirst)),
            Key::Char('2') => Some(Action::Search(Strategy::BestFirst)),
            Key::Char('3') => Some(Action::Search(Strategy::AStar)),
            Key::Char('4') => Some(Action::Search(Strategy::DepthFirst)),
            Key::Char('c') => Some(Action::Clear),
            Key::Char('m') => Some(Action::Maze),
            Key::Char('q') | Key::Escape => Some(Action::Quit),
            Key::Space => Some(Action::ResetOverlay),
            _ => None,
        }
    }
}

/// Owns the grid and applies user actions to it.
pub struct Visualizer {
    grid: Grid,
    cfg: VizConfig,
    rng: StdRng,
    status: String,
}

impl Visualizer {
    /// Build an empty grid from `cfg`. The rng is seeded from `cfg.seed` when
    /// set.
    pub fn new(cfg: VizConfig) -> Result<Self, ConfigError> {
        let grid = cfg.build_grid()?;
        let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "visualizer: {0}x{0} grid, cell size {1}, seed {seed}",
            grid.rows(),
            grid.cell_size()
        );
        Ok(Self {
            grid,
            cfg,
            rng: StdRng::seed_from_u64(seed),
            status: KEY_HELP.to_string(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &VizConfig {
        &self.cfg
    }

    /// Text for the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The action an input message asks for, if any.
    pub fn action_for(&self, msg: &Msg) -> Option<Action> {
        match *msg {
            Msg::KeyDown(key) => Action::for_key(key),
            Msg::Mouse { button, x, y } => {
                let p = render::screen_to_pos(&self.grid, x, y)?;
                Some(match button {
                    MouseButton::Main => Action::Paint(p),
                    MouseButton::Secondary => Action::Erase(p),
                })
            }
            Msg::Quit => Some(Action::Quit),
            Msg::Screen { .. } => None,
        }
    }

    /// Apply `action`. Searches report each step to `observer`.
    ///
    /// [`Action::Quit`] is left to the caller.
    pub fn apply<O: StepObserver + ?Sized>(
        &mut self,
        action: Action,
        observer: &mut O,
    ) -> Result<(), SearchError> {
        match action {
            Action::Paint(p) => self.paint(p)?,
            Action::Erase(p) => self.grid.erase(p)?,
            Action::Search(strategy) => self.run(strategy, observer)?,
            Action::Clear => {
                self.grid.clear();
                self.status = KEY_HELP.to_string();
            }
            Action::ResetOverlay => {
                let n = self.grid.reset_search_overlay();
                log::debug!("visualizer: cleared {n} overlay cells");
                self.status = KEY_HELP.to_string();
            }
            Action::Maze => {
                self.grid.reset_search_overlay();
                let placed = self
                    .grid
                    .randomize_barriers(self.cfg.barrier_probability, &mut self.rng)?;
                self.status = format!("{placed} barriers placed | {KEY_HELP}");
            }
            Action::Quit => {}
        }
        Ok(())
    }

    /// First click places start, second places end, later clicks place
    /// barriers. Endpoints are never painted over.
    fn paint(&mut self, p: Pos) -> Result<(), SearchError> {
        let state = self.grid.state(p).unwrap_or_default();
        if state.is_endpoint() {
            return Ok(());
        }
        if self.grid.start().is_none() {
            self.grid.set_start(p)?;
        } else if self.grid.end().is_none() {
            self.grid.set_end(p)?;
        } else {
            self.grid.set_barrier(p)?;
        }
        Ok(())
    }

    fn run<O: StepObserver + ?Sized>(
        &mut self,
        strategy: Strategy,
        observer: &mut O,
    ) -> Result<(), SearchError> {
        if self.grid.start().is_none() || self.grid.end().is_none() {
            self.status = format!("place a start and an end first | {KEY_HELP}");
            return Ok(());
        }
        self.grid.reset_search_overlay();
        self.grid.recompute_all_neighbors();
        let outcome = search(strategy, &mut self.grid, observer)?;
        self.status = format!("{} | {KEY_HELP}", describe(strategy, &outcome));
        Ok(())
    }
}

/// One-line summary of a finished run.
pub fn describe(strategy: Strategy, outcome: &SearchOutcome) -> String {
    let verdict = if outcome.cancelled {
        "cancelled".to_string()
    } else if let Some(len) = outcome.path_len {
        format!("path of {len}")
    } else {
        "no path".to_string()
    };
    format!("{strategy}: {verdict}, {} expanded", outcome.expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::CellState;
    use pathviz_search::{NoopObserver, Progress};

    fn viz(rows: usize) -> Visualizer {
        Visualizer::new(VizConfig {
            rows,
            pixel_width: rows as u32 * 10,
            seed: Some(7),
            ..VizConfig::default()
        })
        .unwrap()
    }

    fn click(v: &mut Visualizer, button: MouseButton, p: Pos) {
        let (x, y) = render::pos_to_screen(p);
        let action = v.action_for(&Msg::Mouse { button, x, y }).unwrap();
        v.apply(action, &mut NoopObserver).unwrap();
    }

    #[test]
    fn key_bindings() {
        assert_eq!(
            Action::for_key(Key::Char('1')),
            Some(Action::Search(Strategy::BreadthFirst))
        );
        assert_eq!(
            Action::for_key(Key::Char('2')),
            Some(Action::Search(Strategy::BestFirst))
        );
        assert_eq!(
            Action::for_key(Key::Char('3')),
            Some(Action::Search(Strategy::AStar))
        );
        assert_eq!(
            Action::for_key(Key::Char('4')),
            Some(Action::Search(Strategy::DepthFirst))
        );
        assert_eq!(Action::for_key(Key::Escape), Some(Action::Quit));
        assert_eq!(Action::for_key(Key::Space), Some(Action::ResetOverlay));
        assert_eq!(Action::for_key(Key::Char('x')), None);
    }

    #[test]
    fn clicks_place_start_end_then_barriers() {
        let mut v = viz(5);
        click(&mut v, MouseButton::Main, Pos::new(0, 0));
        click(&mut v, MouseButton::Main, Pos::new(4, 4));
        click(&mut v, MouseButton::Main, Pos::new(2, 2));
        // Endpoints are not painted over.
        click(&mut v, MouseButton::Main, Pos::new(0, 0));
        let g = v.grid();
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.end(), Some(Pos::new(4, 4)));
        assert_eq!(g.state(Pos::new(2, 2)), Some(CellState::Barrier));
        assert_eq!(g.count(CellState::Barrier), 1);
    }

    #[test]
    fn erasing_start_lets_next_click_replace_it() {
        let mut v = viz(5);
        click(&mut v, MouseButton::Main, Pos::new(0, 0));
        click(&mut v, MouseButton::Main, Pos::new(4, 4));
        click(&mut v, MouseButton::Secondary, Pos::new(0, 0));
        assert_eq!(v.grid().start(), None);
        click(&mut v, MouseButton::Main, Pos::new(1, 3));
        assert_eq!(v.grid().start(), Some(Pos::new(1, 3)));
        assert_eq!(v.grid().end(), Some(Pos::new(4, 4)));
    }

    #[test]
    fn clicks_outside_grid_are_ignored() {
        let v = viz(5);
        let msg = Msg::Mouse {
            button: MouseButton::Main,
            x: 10,
            y: 0,
        };
        assert_eq!(v.action_for(&msg), None);
    }

    #[test]
    fn search_needs_both_endpoints() {
        let mut v = viz(5);
        click(&mut v, MouseButton::Main, Pos::new(0, 0));
        v.apply(Action::Search(Strategy::AStar), &mut NoopObserver)
            .unwrap();
        assert!(v.status().starts_with("place a start"));
        assert_eq!(v.grid().count(CellState::Closed), 0);
    }

    #[test]
    fn search_after_barrier_edits_recomputes_neighbours() {
        let mut v = viz(5);
        click(&mut v, MouseButton::Main, Pos::new(0, 0));
        click(&mut v, MouseButton::Main, Pos::new(0, 4));
        for row in 0..4 {
            click(&mut v, MouseButton::Main, Pos::new(row, 2));
        }
        v.apply(Action::Search(Strategy::AStar), &mut NoopObserver)
            .unwrap();
        assert!(v.status().starts_with("A*: path of 12"), "{}", v.status());
        assert_eq!(v.grid().state(Pos::new(4, 2)), Some(CellState::Path));

        // Running again starts from a clean overlay.
        v.apply(Action::Search(Strategy::BreadthFirst), &mut NoopObserver)
            .unwrap();
        assert!(v.status().starts_with("breadth-first: path of 12"));
        assert_eq!(v.grid().count(CellState::Path), 11);
    }

    #[test]
    fn cancelled_run_is_reported() {
        let mut v = viz(6);
        click(&mut v, MouseButton::Main, Pos::new(0, 0));
        click(&mut v, MouseButton::Main, Pos::new(5, 5));
        let mut obs = |_: &Grid| Progress::Cancel;
        v.apply(Action::Search(Strategy::DepthFirst), &mut obs)
            .unwrap();
        assert!(v.status().starts_with("depth-first: cancelled, 1 expanded"));
    }

    #[test]
    fn reset_overlay_and_clear() {
        let mut v = viz(4);
        click(&mut v, MouseButton::Main, Pos::new(0, 0));
        click(&mut v, MouseButton::Main, Pos::new(3, 3));
        click(&mut v, MouseButton::Main, Pos::new(1, 1));
        v.apply(Action::Search(Strategy::BreadthFirst), &mut NoopObserver)
            .unwrap();
        assert!(v.grid().count(CellState::Path) > 0);

        v.apply(Action::ResetOverlay, &mut NoopObserver).unwrap();
        let g = v.grid();
        assert_eq!(g.count(CellState::Path), 0);
        assert_eq!(g.count(CellState::Closed), 0);
        assert_eq!(g.count(CellState::Open), 0);
        assert_eq!(g.count(CellState::Barrier), 1);
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(v.status(), KEY_HELP);

        v.apply(Action::Clear, &mut NoopObserver).unwrap();
        assert_eq!(v.grid().count(CellState::Empty), 16);
        assert_eq!(v.grid().start(), None);
    }

    #[test]
    fn maze_keeps_endpoints_and_is_seeded() {
        let mut a = viz(12);
        let mut b = viz(12);
        for v in [&mut a, &mut b] {
            click(v, MouseButton::Main, Pos::new(0, 0));
            click(v, MouseButton::Main, Pos::new(11, 11));
            v.apply(Action::Maze, &mut NoopObserver).unwrap();
        }
        assert_eq!(a.grid().to_string(), b.grid().to_string());
        assert!(a.grid().count(CellState::Barrier) > 0);
        assert_eq!(a.grid().start(), Some(Pos::new(0, 0)));
        assert_eq!(a.grid().end(), Some(Pos::new(11, 11)));
        assert!(a.status().contains("barriers placed"));
    }

    #[test]
    fn describe_outcomes() {
        let found = SearchOutcome {
            found: true,
            cancelled: false,
            expanded: 9,
            path_len: Some(4),
        };
        assert_eq!(describe(Strategy::AStar, &found), "A*: path of 4, 9 expanded");
        let none = SearchOutcome {
            found: false,
            cancelled: false,
            expanded: 3,
            path_len: None,
        };
        assert_eq!(
            describe(Strategy::BestFirst, &none),
            "best-first: no path, 3 expanded"
        );
    }
}

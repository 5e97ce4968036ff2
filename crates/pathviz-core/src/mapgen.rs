//! Random obstacle generation.

use rand::{Rng, RngExt};

use crate::error::GridError;
use crate::grid::Grid;

/// Default share of cells turned into barriers (one outcome in four).
pub const DEFAULT_BARRIER_PROBABILITY: f64 = 0.25;

impl Grid {
    /// Independently turn each cell into a barrier with `probability`.
    ///
    /// Start and end cells are skipped; cells that are not picked keep their
    /// state. Returns the number of cells picked.
    pub fn randomize_barriers(
        &mut self,
        probability: f64,
        rng: &mut impl Rng,
    ) -> Result<usize, GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }
        let mut placed = 0;
        for i in 0..self.len() {
            let p = self.pos(i);
            if self.state(p).is_some_and(|s| s.is_endpoint()) {
                continue;
            }
            if rng.random_bool(probability) {
                self.set_barrier(p)?;
                placed += 1;
            }
        }
        log::debug!(
            "mapgen: placed {placed} barriers on {} cells (p = {probability})",
            self.len()
        );
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;
    use crate::geom::Pos;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with_endpoints() -> Grid {
        let mut g = Grid::new(10, 100).unwrap();
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_end(Pos::new(9, 9)).unwrap();
        g
    }

    #[test]
    fn full_probability_fills_all_but_endpoints() {
        let mut g = grid_with_endpoints();
        let mut rng = StdRng::seed_from_u64(7);
        let placed = g.randomize_barriers(1.0, &mut rng).unwrap();
        assert_eq!(placed, 98);
        assert_eq!(g.count(CellState::Barrier), 98);
        assert_eq!(g.state(Pos::new(0, 0)), Some(CellState::Start));
        assert_eq!(g.state(Pos::new(9, 9)), Some(CellState::End));
        assert!(g.neighbors_stale());
    }

    #[test]
    fn zero_probability_changes_nothing() {
        let mut g = grid_with_endpoints();
        g.recompute_all_neighbors();
        let before = g.to_string();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(g.randomize_barriers(0.0, &mut rng).unwrap(), 0);
        assert_eq!(g.to_string(), before);
        assert!(!g.neighbors_stale());
    }

    #[test]
    fn default_probability_is_roughly_a_quarter() {
        let mut g = Grid::new(50, 800).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let placed = g
            .randomize_barriers(DEFAULT_BARRIER_PROBABILITY, &mut rng)
            .unwrap();
        // 2500 cells, expected 625.
        assert!((450..800).contains(&placed), "placed {placed}");
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = Grid::new(12, 120).unwrap();
        let mut b = Grid::new(12, 120).unwrap();
        a.randomize_barriers(0.3, &mut StdRng::seed_from_u64(3)).unwrap();
        b.randomize_barriers(0.3, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn invalid_probability_rejected() {
        let mut g = Grid::new(3, 30).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            g.randomize_barriers(1.5, &mut rng).unwrap_err(),
            GridError::InvalidProbability(1.5)
        );
        assert!(g.randomize_barriers(-0.1, &mut rng).is_err());
        assert!(g.randomize_barriers(f64::NAN, &mut rng).is_err());
    }
}

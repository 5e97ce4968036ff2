//! Visualizer settings.

use std::path::PathBuf;

use crate::error::{ConfigError, GridError};
use crate::grid::Grid;
use crate::mapgen::DEFAULT_BARRIER_PROBABILITY;

/// Settings for a visualizer session.
///
/// With the `serde` feature every field is optional in JSON and falls back
/// to [`VizConfig::default`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VizConfig {
    /// Rows (and columns) of the grid.
    pub rows: usize,
    /// Width of the drawing surface in pixels.
    pub pixel_width: u32,
    /// Chance that the maze key turns a cell into a barrier.
    pub barrier_probability: f64,
    /// Pause after each search step, in milliseconds.
    pub step_delay_ms: u64,
    /// Seed for barrier generation; a fresh one is drawn when unset.
    pub seed: Option<u64>,
    /// Where log records go. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            pixel_width: 800,
            barrier_probability: DEFAULT_BARRIER_PROBABILITY,
            step_delay_ms: 0,
            seed: None,
            log_file: None,
        }
    }
}

impl VizConfig {
    /// Check the values a grid would reject, plus cells narrower than a
    /// pixel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.pixel_width == 0 || (self.pixel_width as usize) < self.rows {
            return Err(GridError::InvalidDimensions {
                rows: self.rows,
                pixel_width: self.pixel_width,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.barrier_probability) {
            return Err(GridError::InvalidProbability(self.barrier_probability).into());
        }
        Ok(())
    }

    /// Build the empty grid described by this config.
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        self.validate()?;
        Ok(Grid::new(self.rows, self.pixel_width)?)
    }

    /// Parse and validate a JSON config.
    #[cfg(feature = "serde")]
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_layout() {
        let cfg = VizConfig::default();
        assert_eq!(cfg.rows, 50);
        assert_eq!(cfg.pixel_width, 800);
        assert_eq!(cfg.barrier_probability, 0.25);
        assert!(cfg.validate().is_ok());
        let g = cfg.build_grid().unwrap();
        assert_eq!(g.cell_size(), 16);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cfg = VizConfig {
            rows: 0,
            ..VizConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Invalid(GridError::InvalidDimensions { .. }))
        ));

        let cfg = VizConfig {
            rows: 100,
            pixel_width: 60,
            ..VizConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = VizConfig {
            barrier_probability: 2.0,
            ..VizConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Invalid(GridError::InvalidProbability(_)))
        ));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg = VizConfig::from_json(r#"{ "rows": 20, "seed": 9 }"#).unwrap();
        assert_eq!(cfg.rows, 20);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.pixel_width, 800);
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn invalid_json_values_rejected() {
        assert!(matches!(
            VizConfig::from_json(r#"{ "barrier_probability": -1.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            VizConfig::from_json("{ rows: 3 }"),
            Err(ConfigError::Json(_))
        ));
    }
}

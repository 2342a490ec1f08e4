//! Coordinate system and square grid for grid combat games.
//!
//! A [`Grid`] owns one canonical [`Square`] per coordinate. Squares compare equal
//! by coordinates alone, so a freshly built `Square::new(x, y)` works as a lookup
//! probe. Projection along a [`Direction`] and the neighbour queries built on it
//! return `None` or skip entries when they fall off the board.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::string::ToString;
use serde::{Deserialize, Serialize};

pub use direction::*;
pub use error::*;
pub use grid::*;
pub use square::*;
pub use types::*;

mod direction;
mod error;
mod grid;
mod square;
mod types;

/// Side length of the board used when none is configured.
pub const GRID_SIZE: Coord = 10;

/// Largest accepted side length.
pub const MAX_SIDE_LENGTH: Coord = 256;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub side_length: Coord,
    pub default_public_label: Option<char>,
    pub default_private_label: Option<char>,
}

impl GridConfig {
    pub const fn new(side_length: Coord) -> Self {
        Self {
            side_length,
            default_public_label: None,
            default_private_label: None,
        }
    }

    pub const fn with_labels(mut self, pub_label: Option<char>, prv_label: Option<char>) -> Self {
        self.default_public_label = pub_label;
        self.default_private_label = prv_label;
        self
    }

    /// Parse a configuration from JSON, missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|err| GridError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        log::debug!("Loaded grid config: {config:?}");
        Ok(config)
    }

    pub const fn validate(&self) -> Result<()> {
        if self.side_length < 1 || self.side_length > MAX_SIDE_LENGTH {
            Err(GridError::InvalidSideLength(self.side_length))
        } else {
            Ok(())
        }
    }

    pub const fn total_squares(&self) -> usize {
        (self.side_length as usize).saturating_mul(self.side_length as usize)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_grid_size() {
        let config = GridConfig::default();

        assert_eq!(config.side_length, GRID_SIZE);
        assert_eq!(config.total_squares(), 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields() {
        assert_eq!(GridConfig::from_json("{}").unwrap(), GridConfig::default());

        let config = GridConfig::from_json(r#"{"side_length": 3, "default_private_label": "~"}"#)
            .unwrap();
        assert_eq!(config, GridConfig::new(3).with_labels(None, Some('~')));
    }

    #[test]
    fn from_json_rejects_bad_input() {
        assert!(matches!(
            GridConfig::from_json("side_length = 3"),
            Err(GridError::InvalidConfig(_))
        ));
        assert_eq!(
            GridConfig::from_json(r#"{"side_length": 0}"#),
            Err(GridError::InvalidSideLength(0))
        );
    }

    #[test]
    fn grid_from_config_applies_labels() {
        let config = GridConfig::new(2).with_labels(Some('.'), Some('#'));
        let grid = Grid::from_config(&config).unwrap();

        assert_eq!(grid.side_length(), 2);
        assert_eq!(grid.grid_string_labels(false), ". .\n. .");
        assert_eq!(grid.grid_string_labels(true), "# #\n# #");
    }
}

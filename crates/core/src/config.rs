//! Board configuration
//!
//! Dimensions plus the scoring knob. Scoring is a single setting rather than a
//! separate board type: `points_per_tile = 0` yields a board whose score never moves.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::types::POINTS_PER_TILE;

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 8;

/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 8;

/// Largest number of cells a board may hold (4096 x 4096)
pub const MAX_CELLS: usize = 1 << 24;

/// Board shape and scoring settings, loadable from any serde format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    /// Points added per cleared tile (0 disables scoring)
    pub points_per_tile: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            points_per_tile: POINTS_PER_TILE,
        }
    }
}

impl BoardConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Non-scoring variant of this config.
    pub fn without_score(mut self) -> Self {
        self.points_per_tile = 0;
        self
    }

    pub fn scoring_enabled(&self) -> bool {
        self.points_per_tile > 0
    }

    /// Both dimensions must be positive and the board at most [`MAX_CELLS`] cells.
    pub fn validate(&self) -> Result<(), BoardError> {
        let cells = self.width.checked_mul(self.height);
        if self.width == 0 || self.height == 0 || !cells.is_some_and(|n| n <= MAX_CELLS) {
            return Err(BoardError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

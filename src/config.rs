//! Run configuration for the autoplay binary
//!
//! Loaded from TOML; every field is optional and falls back to its default.
//!
//! ```toml
//! seed = 42
//! colors = 5
//! moves = 200
//!
//! [board]
//! width = 8
//! height = 8
//! points_per_tile = 10
//! ```

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::BoardConfig;

/// Largest palette the runner will build (tiles are `u8` colour indices)
pub const MAX_COLORS: u8 = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub board: BoardConfig,
    /// Seed shared by the tile bag and the move picker
    pub seed: u32,
    /// Number of distinct tile colours
    pub colors: u8,
    /// Number of moves to attempt
    pub moves: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            seed: 1,
            colors: 5,
            moves: 100,
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(s).context("autoplay: invalid config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("autoplay: failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("autoplay: failed to load config {}", path.display()))
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;
        if self.colors == 0 || self.colors > MAX_COLORS {
            return Err(anyhow!(
                "autoplay: colors must be between 1 and {}, got {}",
                MAX_COLORS,
                self.colors
            ));
        }
        Ok(())
    }

    /// Tile palette `0..colors`
    pub fn palette(&self) -> Vec<u8> {
        (0..self.colors).collect()
    }
}

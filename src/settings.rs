//! Session settings
//!
//! Loaded from an optional JSON file; missing fields fall back to defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Board, Direction};

/// Heading given to a fresh actor after a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResetDirection {
    /// Uniform draw over the four directions
    #[default]
    Random,
    /// Always the same heading
    Fixed(Direction),
}

impl ResetDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetDirection::Random => "random",
            ResetDirection::Fixed(dir) => dir.as_str(),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Columns
    pub board_width: i32,
    /// Rows
    pub board_height: i32,

    // === Presentation ===
    /// Pixels per cell edge (for renderers)
    pub cell_size: u32,

    // === Pacing ===
    /// Simulation speed; the only difficulty knob
    pub ticks_per_second: u32,

    // === Determinism ===
    /// RNG seed, `None` to seed from entropy
    pub seed: Option<u64>,
    /// Heading after a collision reset
    pub reset_direction: ResetDirection,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
            seed: None,
            reset_direction: ResetDirection::Random,
        }
    }
}

impl Settings {
    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height)
    }

    /// Wall-clock time between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second.max(1) as f64)
    }

    /// Check the settings describe a playable session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.board_width,
                height: self.board_height,
            });
        }
        let area = self.board().area();
        if area < 2 {
            return Err(ConfigError::BoardTooSmall { area });
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

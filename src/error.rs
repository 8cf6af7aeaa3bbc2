//! Error types
//!
//! Reversal requests and self-collision are not errors: the first is dropped,
//! the second resets the session. Only misconfiguration reaches the host.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("board dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: i32, height: i32 },
    #[error("board of {area} cell(s) cannot hold the actor and a target")]
    BoardTooSmall { area: usize },
    #[error("ticks_per_second must be positive")]
    ZeroTickRate,
    #[error("cell_size must be non-zero")]
    ZeroCellSize,
}

/// Failures surfaced by the simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// No free cell left for the target; the actor fills the board
    #[error("no free cell for target: {occupied} of {area} cells occupied")]
    OutOfSpace { occupied: usize, area: usize },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid actor: {0}")]
    InvalidActor(&'static str),
    #[error("target {col},{row} overlaps the actor or lies off the board")]
    InvalidTarget { col: i32, row: i32 },
}

//! Torus Snake - a grid snake on a wrap-around board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, target placement)
//! - `session`: Game session state machine (tick, input, reset)
//! - `platform`: Tick pacing and input plumbing for hosts
//! - `renderer`: Read-only view handed to renderers
//! - `settings`: Session configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, SimError};
pub use session::GameSession;
pub use settings::{ResetDirection, Settings};

/// Game configuration constants
pub mod consts {
    /// Default board size in cells (640x480 surface at 20 px per cell)
    pub const BOARD_WIDTH: i32 = 32;
    pub const BOARD_HEIGHT: i32 = 24;
    /// Default pixels per cell edge
    pub const CELL_SIZE: u32 = 20;

    /// Default simulation rate
    pub const TICKS_PER_SECOND: u32 = 10;
    /// Maximum ticks run for one frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed to the tick clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

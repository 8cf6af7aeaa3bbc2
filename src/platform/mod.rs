//! Platform abstraction layer
//!
//! Host-side collaborators the simulation consumes:
//! - Time/ticks (fixed-rate tick clock)
//! - Input events (key mapping, thread-safe request slot)

pub mod input;
pub mod time;

pub use input::SharedInput;
pub use time::TickClock;

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell of movement per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod direction;
pub mod grid;
pub mod placer;
pub mod state;
pub mod tick;

pub use direction::{Direction, propose};
pub use grid::{Board, Cell, wrap};
pub use placer::place;
pub use state::{Actor, Target};
pub use tick::{Advance, Step, TickEvent, step};

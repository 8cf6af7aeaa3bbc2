//! Input plumbing for hosts that poll keys on another thread
//!
//! Holds at most one pending request. Writers overwrite it, the session
//! empties it with a single swap per tick.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::sim::{Direction, propose};

const EMPTY: u8 = 0;

#[derive(Debug)]
pub struct SharedInput {
    /// Heading published after the last tick
    current: AtomicU8,
    /// Latest accepted request, `EMPTY` if none
    pending: AtomicU8,
}

impl SharedInput {
    pub fn new(current: Direction) -> Self {
        Self {
            current: AtomicU8::new(current.to_bits()),
            pending: AtomicU8::new(EMPTY),
        }
    }

    /// Filter `requested` against the published heading and store it
    pub fn request(&self, requested: Direction) -> bool {
        let current = Direction::from_bits(self.current.load(Ordering::Acquire));
        let accepted = match current {
            Some(current) => propose(current, requested),
            None => Some(requested),
        };
        match accepted {
            Some(dir) => {
                self.pending.swap(dir.to_bits(), Ordering::AcqRel);
                true
            }
            None => false,
        }
    }

    /// Take the pending request, leaving the slot empty
    pub fn take(&self) -> Option<Direction> {
        Direction::from_bits(self.pending.swap(EMPTY, Ordering::AcqRel))
    }

    /// Record the heading the next requests are filtered against
    pub fn publish(&self, current: Direction) {
        self.current.store(current.to_bits(), Ordering::Release);
    }

    pub fn current(&self) -> Option<Direction> {
        Direction::from_bits(self.current.load(Ordering::Acquire))
    }
}

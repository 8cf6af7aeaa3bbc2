//! Fixed-rate tick pacing

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

/// Converts elapsed wall time into a count of due ticks
#[derive(Debug, Clone)]
pub struct TickClock {
    tick_dt: f32,
    accumulator: f32,
}

impl TickClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            tick_dt: 1.0 / ticks_per_second.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Add elapsed seconds and return how many ticks to run now
    ///
    /// Long stalls are clamped so a hitch never turns into a burst of moves.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DT);

        let mut due = 0;
        while self.accumulator >= self.tick_dt && due < MAX_SUBSTEPS {
            self.accumulator -= self.tick_dt;
            due += 1;
        }
        due
    }

    /// Drop any partial tick
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

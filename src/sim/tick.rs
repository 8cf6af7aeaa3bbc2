//! Per-tick simulation step
//!
//! One call advances the actor by exactly one cell. Order matters:
//! 1. Resolve the heading (pending request wins, then is cleared)
//! 2. Compute the wrapped candidate head
//! 3. Check the candidate against the body cells that stay occupied
//! 4. Check for the target and extend the target length
//! 5. Push the head, drop the tail unless growing, relocate the target

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Board, Cell};
use super::placer::place;
use super::state::{Actor, Target};
use crate::error::SimError;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    None,
    Grew,
    Collided,
}

/// A committed move
#[derive(Debug, Clone)]
pub struct Advance {
    pub actor: Actor,
    pub target: Target,
    /// True when the target was consumed this tick
    pub grew: bool,
    /// Tail cell released this tick, if any
    pub vacated: Option<Cell>,
}

/// Result of one step
#[derive(Debug, Clone)]
pub enum Step {
    Moved(Advance),
    /// The candidate head hit the body; nothing moved
    Collided { at: Cell },
}

impl Step {
    pub fn event(&self) -> TickEvent {
        match self {
            Step::Moved(Advance { grew: true, .. }) => TickEvent::Grew,
            Step::Moved(_) => TickEvent::None,
            Step::Collided { .. } => TickEvent::Collided,
        }
    }
}

/// Advance `actor` by one tick
///
/// Inputs are left untouched; on `Err` the caller still holds the previous
/// state. The only error is `OutOfSpace` when a grown actor leaves no cell for
/// the target.
pub fn step<R: Rng>(
    actor: &Actor,
    target: Target,
    board: Board,
    rng: &mut R,
) -> Result<Step, SimError> {
    let direction = actor.pending.unwrap_or(actor.direction);
    let head = actor.head().offset(direction.delta(), board);

    // The tail only frees up when the body is not still growing
    let checked = if actor.is_growing() {
        actor.body.len()
    } else {
        actor.body.len() - 1
    };
    if actor.body.iter().take(checked).any(|c| *c == head) {
        return Ok(Step::Collided { at: head });
    }

    let grew = head == target.cell;
    let target_length = if grew {
        actor.target_length.max(actor.body.len() + 1)
    } else {
        actor.target_length
    };

    let mut body = actor.body.clone();
    body.push_front(head);
    let vacated = if body.len() > target_length {
        body.pop_back()
    } else {
        None
    };

    let next = Actor {
        body,
        direction,
        pending: None,
        target_length,
    };

    let target = if grew {
        let cell = place(&next.occupied(), board, rng)?;
        log::debug!(
            "Grew to length {} at {},{}; target moved to {},{}",
            target_length,
            head.col,
            head.row,
            cell.col,
            cell.row
        );
        Target::new(cell)
    } else {
        target
    };

    Ok(Step::Moved(Advance {
        actor: next,
        target,
        grew,
        vacated,
    }))
}

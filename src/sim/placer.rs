//! Target placement by rejection sampling

use std::collections::HashSet;

use rand::Rng;

use super::grid::{Board, Cell};
use crate::error::SimError;

/// Pick a uniformly random cell of `board` that is not in `occupied`
///
/// Both axes are drawn together on every attempt, so a candidate sharing a row
/// or column with an occupied cell is still checked as a whole cell.
/// Fails with `OutOfSpace` instead of looping when the board is full.
pub fn place<R: Rng>(
    occupied: &HashSet<Cell>,
    board: Board,
    rng: &mut R,
) -> Result<Cell, SimError> {
    let area = board.area();
    let blocked = occupied.iter().filter(|c| board.contains(**c)).count();
    if blocked >= area {
        return Err(SimError::OutOfSpace {
            occupied: blocked,
            area,
        });
    }

    loop {
        let candidate = Cell::new(
            rng.random_range(0..board.width),
            rng.random_range(0..board.height),
        );
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
    }
}

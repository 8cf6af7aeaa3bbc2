//! Actor and target state
//!
//! Plain values owned by the session. A tick reads the current actor and
//! produces the next one; neither type carries rendering data.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::direction::{Direction, propose};
use super::grid::{Board, Cell};
use crate::error::SimError;

/// The snake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Occupied cells, head first
    pub(crate) body: VecDeque<Cell>,
    /// Heading used by the last tick
    pub(crate) direction: Direction,
    /// Accepted request waiting for the next tick (latest wins)
    pub(crate) pending: Option<Direction>,
    /// Length the body grows toward, one cell per tick
    pub(crate) target_length: usize,
}

impl Actor {
    /// Fresh single-cell actor at the board center
    pub fn spawn(board: Board, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(board.center());
        Self {
            body,
            direction,
            pending: None,
            target_length: 1,
        }
    }

    /// Build an actor from explicit cells, head first
    ///
    /// Cells must be non-empty, distinct, and on the board. The target length
    /// is the current length.
    pub fn from_cells(
        cells: impl IntoIterator<Item = Cell>,
        direction: Direction,
        board: Board,
    ) -> Result<Self, SimError> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        let target_length = body.len();
        let actor = Self {
            body,
            direction,
            pending: None,
            target_length,
        };
        actor.validate(board)?;
        Ok(actor)
    }

    /// Check an actor built outside `spawn`/`from_cells` (e.g. deserialized)
    pub fn validate(&self, board: Board) -> Result<(), SimError> {
        if self.body.is_empty() {
            return Err(SimError::InvalidActor("body is empty"));
        }
        if self.body.iter().any(|c| !board.contains(*c)) {
            return Err(SimError::InvalidActor("body cell off the board"));
        }
        if self.occupied().len() != self.body.len() {
            return Err(SimError::InvalidActor("body overlaps itself"));
        }
        if self.target_length < self.body.len() {
            return Err(SimError::InvalidActor("target length shorter than body"));
        }
        if self.pending == Some(self.direction.opposite()) {
            return Err(SimError::InvalidActor("pending direction reverses heading"));
        }
        Ok(())
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// True while the body is shorter than its target length
    pub fn is_growing(&self) -> bool {
        self.body.len() < self.target_length
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Offer a direction change; returns whether it was accepted as pending
    pub fn request(&mut self, requested: Direction) -> bool {
        match propose(self.direction, requested) {
            Some(dir) => {
                self.pending = Some(dir);
                true
            }
            None => false,
        }
    }
}

/// The consumable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub cell: Cell,
}

impl Target {
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }
}

//! Toroidal grid topology
//!
//! Cells are addressed by (column, row), 0-indexed from the top-left. Movement
//! off one edge re-enters from the opposite edge; nothing is ever out of bounds.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Wrap a coordinate into `[0, axis_size)`
///
/// Works for any signed offset, not just ±1.
#[inline]
pub fn wrap(coordinate: i32, axis_size: i32) -> i32 {
    ((coordinate % axis_size) + axis_size) % axis_size
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Move by `delta` and wrap each axis independently
    pub fn offset(self, delta: IVec2, board: Board) -> Self {
        Self {
            col: wrap(self.col + delta.x, board.width),
            row: wrap(self.row + delta.y, board.height),
        }
    }

    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.col, self.row)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

/// Board dimensions in cells (fixed for a session)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// Spawn cell for a fresh actor
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.col) && (0..self.height).contains(&cell.row)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(col, row)))
    }
}

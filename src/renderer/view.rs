//! Read-only snapshot handed to renderers

use std::collections::VecDeque;

use glam::Vec2;

use crate::sim::{Board, Cell};

/// 8-bit RGB color
pub type Rgb = [u8; 3];

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    /// Body cells, head first
    pub body: &'a VecDeque<Cell>,
    pub target: Cell,
    /// Tail cell released by the last tick; erase it when drawing incrementally
    pub vacated: Option<Cell>,
    pub board: Board,
    /// Pixels per cell edge
    pub cell_size: u32,
}

impl RenderView<'_> {
    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    /// Top-left pixel of a cell
    pub fn cell_to_pixel(&self, cell: Cell) -> Vec2 {
        cell.as_ivec2().as_vec2() * self.cell_size as f32
    }

    /// Surface size in pixels
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.board.width.max(0) as u32 * self.cell_size,
            self.board.height.max(0) as u32 * self.cell_size,
        )
    }
}

/// Colors, kept out of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub body: Rgb,
    pub target: Rgb,
    pub border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            body: [0, 255, 0],
            target: [255, 0, 0],
            border: [93, 216, 228],
        }
    }
}

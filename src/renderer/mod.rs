//! Render collaborator boundary
//!
//! Renderers only read a `RenderView`; they never touch simulation state.

pub mod ascii;
pub mod view;

pub use view::{Palette, RenderView, Rgb};

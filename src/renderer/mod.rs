//! Rendering module
//!
//! `commands` projects the game state into colored rectangles; the rest is the
//! wgpu backend that draws them.

pub mod commands;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use commands::{DrawCommand, project, submit};
pub use pipeline::Renderer;

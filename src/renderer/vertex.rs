//! Vertex and color types for flat 2D quads

use bytemuck::{Pod, Zeroable};

/// Linear RGBA
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.02, 0.02, 0.05, 1.0];
    pub const BAR: Color = [0.2, 0.8, 0.4, 1.0];
    pub const PROJECTILE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TARGET: Color = [0.4, 0.7, 1.0, 1.0];
}

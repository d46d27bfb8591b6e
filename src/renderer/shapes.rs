//! Shape generation for 2D primitives

use super::vertex::{Color, Vertex};
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::Rect;

/// Map a playfield pixel (origin top-left, y down) to normalized device
/// coordinates (origin centre, y up). The playfield always spans the whole
/// surface, whatever its physical size.
#[inline]
pub fn pixel_to_ndc(x: f32, y: f32) -> [f32; 2] {
    [x / WINDOW_WIDTH * 2.0 - 1.0, 1.0 - y / WINDOW_HEIGHT * 2.0]
}

/// Two triangles covering `rect`
pub fn quad(rect: Rect, color: Color) -> [Vertex; 6] {
    let [x0, y0] = pixel_to_ndc(rect.x as f32, rect.y as f32);
    let [x1, y1] = pixel_to_ndc(rect.right() as f32, rect.bottom() as f32);

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(0.0, 0.0), [-1.0, 1.0]);
        assert_eq!(pixel_to_ndc(WINDOW_WIDTH, WINDOW_HEIGHT), [1.0, -1.0]);
        assert_eq!(pixel_to_ndc(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0), [0.0, 0.0]);
    }

    #[test]
    fn test_quad_covers_rect() {
        let color = [1.0, 0.0, 0.0, 1.0];
        let rect = Rect::new(0, 0, WINDOW_WIDTH as u32 / 2, WINDOW_HEIGHT as u32 / 2);
        let vertices = quad(rect, color);

        // Top-left quarter of the screen
        for v in &vertices {
            assert!(v.position[0] == -1.0 || v.position[0] == 0.0);
            assert!(v.position[1] == 1.0 || v.position[1] == 0.0);
            assert_eq!(v.color, color);
        }
        assert!(vertices.contains(&Vertex::new(-1.0, 1.0, color)));
        assert!(vertices.contains(&Vertex::new(0.0, 0.0, color)));
    }
}

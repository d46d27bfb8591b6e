//! Axis-aligned rectangle geometry
//!
//! Entity positions are floating point, but collision and drawing both work on
//! integer pixel rectangles. Fractional coordinates are truncated toward zero
//! (not rounded) so collision results match what ends up on screen.

/// Integer pixel rectangle (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// True if the rectangle lies entirely within `[0, width] x [0, height]`
    #[cfg(test)]
    pub fn within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= width && self.bottom() <= height
    }
}

/// Build a rectangle from floating point bounds, truncating toward zero
#[inline]
pub fn rect_of(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(x as i32, y as i32, w as u32, h as u32)
}

/// True iff the two rectangles share a positive-area intersection.
///
/// Rectangles that only touch along an edge do not overlap, and an empty
/// rectangle never overlaps anything.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_of_truncates_toward_zero() {
        let r = rect_of(10.9, 4.2, 5.99, 3.5);
        assert_eq!(r, Rect::new(10, 4, 5, 3));

        // Negative coordinates truncate toward zero, not down
        let r = rect_of(-1.7, -0.4, 2.0, 2.0);
        assert_eq!(r, Rect::new(-1, 0, 2, 2));
    }

    #[test]
    fn test_overlaps_intersecting() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(overlaps(a, b));
        assert!(overlaps(b, a));
    }

    #[test]
    fn test_overlaps_contained() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 2, 2);
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        // Shares the vertical edge x = 10
        assert!(!overlaps(a, Rect::new(10, 0, 10, 10)));
        // Shares the horizontal edge y = 10
        assert!(!overlaps(a, Rect::new(0, 10, 10, 10)));
        // Corner contact only
        assert!(!overlaps(a, Rect::new(10, 10, 5, 5)));
        // One pixel of overlap is enough
        assert!(overlaps(a, Rect::new(9, 9, 5, 5)));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!overlaps(a, Rect::new(5, 5, 0, 3)));
        assert!(!overlaps(Rect::new(5, 5, 3, 0), a));
    }

    #[test]
    fn test_within_bounds() {
        assert!(Rect::new(0, 0, 800, 600).within(800, 600));
        assert!(Rect::new(790, 590, 10, 10).within(800, 600));
        assert!(!Rect::new(791, 0, 10, 10).within(800, 600));
        assert!(!Rect::new(-1, 0, 10, 10).within(800, 600));
    }
}

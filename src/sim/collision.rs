//! Axis-aligned box primitives
//!
//! Every overlap test in the game is a strict AABB test: boxes that only
//! touch along an edge do not overlap.

use glam::Vec2;

/// Axis-aligned bounding box anchored at its top-left corner (y grows down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box of edge `edge` at `pos`
    pub fn square(pos: Vec2, edge: f32) -> Self {
        Self::new(pos, Vec2::splat(edge))
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Horizontal spans intersect
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }

    /// Vertical spans intersect
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.bottom() > other.top() && self.top() < other.bottom()
    }

    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 30.0);
        let b = Aabb::square(Vec2::new(20.0, 20.0), 20.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 30.0);
        let right = Aabb::square(Vec2::new(30.0, 0.0), 30.0);
        let below = Aabb::square(Vec2::new(0.0, 30.0), 30.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_single_axis_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 30.0);
        let far_below = Aabb::new(Vec2::new(10.0, 100.0), Vec2::new(5.0, 5.0));
        assert!(a.overlaps_x(&far_below));
        assert!(!a.overlaps_y(&far_below));
        assert!(!a.overlaps(&far_below));
    }

    #[test]
    fn test_edges() {
        let a = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(a.left(), 10.0);
        assert_eq!(a.right(), 40.0);
        assert_eq!(a.top(), 20.0);
        assert_eq!(a.bottom(), 60.0);
    }
}

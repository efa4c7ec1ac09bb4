//! Rectangles and anchor fractions.
//!
//! The host tree positions child rectangles through anchors: normalized
//! fractions of the parent rect, independent of pixel size. This module
//! holds the two small value types the slider reads and writes.

use glam::Vec2;

use crate::direction::Axis;

/// An axis-aligned rectangle given by its two corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// The corner with the smallest coordinates.
    pub min: Vec2,
    /// The corner with the largest coordinates.
    pub max: Vec2,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Creates a rectangle from its corners.
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from its minimum corner and size.
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// The rectangle's extent on both axes.
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// The rectangle's width.
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    /// The rectangle's height.
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// The rectangle's center point.
    pub fn center(self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Whether a point lies inside the rectangle.
    ///
    /// The minimum edges are inclusive and the maximum edges exclusive, so
    /// adjacent rectangles never both claim a shared edge.
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
    }
}

/// Normalized anchor fractions of a child rectangle within its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    /// Fraction of the parent rect the child's minimum corner is tied to.
    pub min: Vec2,
    /// Fraction of the parent rect the child's maximum corner is tied to.
    pub max: Vec2,
}

impl Anchors {
    /// Anchors spanning the whole parent rect.
    pub const FULL: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ONE,
    };

    /// Creates anchors from the two fraction pairs.
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The `(min, max)` fraction pair on one axis.
    pub fn span(self, axis: Axis) -> (f32, f32) {
        (axis.component(self.min), axis.component(self.max))
    }

    /// Overwrites the fraction pair on one axis.
    pub fn set_span(&mut self, axis: Axis, min: f32, max: f32) {
        axis.set_component(&mut self.min, min);
        axis.set_component(&mut self.max, max);
    }
}

impl Default for Anchors {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_size_and_center() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 60.0));
        assert_eq!(rect.size(), Vec2::new(20.0, 40.0));
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 40.0);
        assert_eq!(rect.center(), Vec2::new(20.0, 40.0));
    }

    #[test]
    fn test_rect_contains_half_open() {
        let rect = Rect::from_min_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(rect.contains(Vec2::ZERO));
        assert!(rect.contains(Vec2::new(9.9, 9.9)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn test_anchor_spans() {
        let mut anchors = Anchors::FULL;
        assert_eq!(anchors.span(Axis::Horizontal), (0.0, 1.0));

        anchors.set_span(Axis::Horizontal, 0.2, 0.6);
        assert_eq!(anchors.span(Axis::Horizontal), (0.2, 0.6));
        assert_eq!(anchors.span(Axis::Vertical), (0.0, 1.0));
    }
}

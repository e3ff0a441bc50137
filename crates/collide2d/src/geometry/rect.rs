//! Axis-aligned rectangle
//!
//! Provides the rectangle primitive the collision tests consume: edge
//! accessors, containment, overlap-rectangle intersection, conversion to a
//! polygon (plain or rotated), and the axial push-out used to separate two
//! overlapping rectangles.

use crate::foundation::math::{utils, Vec2};
use crate::geometry::Polygon;

/// An axis-aligned rectangle described by position and size
///
/// `contains` treats the left and top edges as inclusive and the right and
/// bottom edges as exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Position of the left edge
    pub x: f32,
    /// Position of the top edge
    pub y: f32,
    /// Width, extending right from `x`
    pub width: f32,
    /// Height, extending down from `y`
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from position and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from position and size vectors
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Position of the left edge
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Position of the top edge
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Position of the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Position of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// True when the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when the point lies inside the rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// True when the two rectangles overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// The overlap rectangle of two rectangles
    ///
    /// Returns the default (empty) rectangle when they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Rect {
        if !self.intersects(other) {
            return Rect::default();
        }

        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Rect::new(left, top, right - left, bottom - top)
    }

    /// The four corners in left-top, right-top, right-bottom, left-bottom order
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.left(), self.bottom()),
        ]
    }

    /// Converts the rectangle to a four-vertex polygon
    ///
    /// Vertex order is left-top, right-top, right-bottom, left-bottom.
    pub fn to_polygon(&self) -> Polygon {
        let mut polygon = Polygon::new();
        self.write_polygon(&mut polygon);
        polygon
    }

    /// Writes the rectangle's corners into a caller-owned polygon
    ///
    /// Lets hot paths reuse one polygon instead of allocating per test.
    pub fn write_polygon(&self, polygon: &mut Polygon) {
        polygon.replace_vertices(&self.corners());
    }

    /// The four corners rotated around `position + origin` by `radians`
    ///
    /// Same corner order as [`Rect::corners`]. The origin is relative to the
    /// rectangle's position.
    pub fn rotated_corners(&self, origin: Vec2, radians: f32) -> [Vec2; 4] {
        let pivot = Vec2::new(self.x + origin.x, self.y + origin.y);

        self.corners()
            .map(|corner| utils::rotate_point(corner, pivot, radians))
    }

    /// Converts the rectangle to a polygon rotated around `position + origin`
    pub fn rotated_polygon(&self, origin: Vec2, radians: f32) -> Polygon {
        let mut polygon = Polygon::new();
        polygon.replace_vertices(&self.rotated_corners(origin, radians));
        polygon
    }

    /// Displacement that moves this rectangle out of an overlap with `other`
    ///
    /// Resolves along a single axis chosen from the overlap rectangle's
    /// shape: X when the overlap is taller than wide, Y otherwise, so an
    /// exactly square overlap resolves on Y. Each branch subtracts the
    /// penetration depth, so a leftward or upward push comes out negative.
    /// Returns zero when the rectangles do not overlap.
    pub fn push_out(&self, other: &Rect) -> Vec2 {
        let overlap = self.intersection(other);
        let mut displacement = Vec2::zeros();

        if overlap.is_empty() {
            return displacement;
        }

        if overlap.height > overlap.width {
            // Lateral collision: resolve on the X axis
            if self.right() > other.left() && self.right() < other.right() {
                displacement.x -= self.right() - other.left();
            } else if self.left() < other.right() && self.left() > other.left() {
                displacement.x -= self.left() - other.right();
            }
        } else {
            // Vertical collision: resolve on the Y axis
            if self.bottom() > other.top() && self.bottom() < other.bottom() {
                displacement.y -= self.bottom() - other.top();
            } else if self.top() < other.bottom() && self.top() > other.top() {
                displacement.y -= self.top() - other.bottom();
            }
        }

        displacement
    }
}

//! Circle primitive with closed-form intersection tests

use crate::foundation::math::{utils, Vec2};
use crate::geometry::Rect;

/// A circle described by its center coordinates and radius
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Center position on the X axis
    pub x: f32,
    /// Center position on the Y axis
    pub y: f32,
    /// Radius
    pub radius: f32,
}

impl Circle {
    /// Creates a circle from a center point and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            x: center.x,
            y: center.y,
            radius,
        }
    }

    /// The center position
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Tests intersection with another circle
    ///
    /// The comparison is strict: tangent circles do not intersect.
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let distance = (self.center() - other.center()).magnitude();
        distance < self.radius + other.radius
    }

    /// Tests intersection with an axis-aligned rectangle
    ///
    /// Clamps the center into the rectangle to find the nearest point, then
    /// compares squared distances. A center lying exactly on the rectangle
    /// boundary has zero distance and reports no intersection.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let nearest = Vec2::new(
            utils::clamp(self.x, rect.left(), rect.right()),
            utils::clamp(self.y, rect.top(), rect.bottom()),
        );

        let distance_squared = (self.center() - nearest).magnitude_squared();

        distance_squared > 0.0 && distance_squared < self.radius * self.radius
    }
}

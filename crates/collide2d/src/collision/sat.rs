//! Separating Axis Theorem intersection engine
//!
//! Two convex polygons are disjoint exactly when some axis exists onto which
//! their projections do not overlap; for polygons it suffices to test the
//! perpendicular of every edge of both. [`intersects`] answers the boolean
//! question and may stop at the first separating axis. [`intersection`]
//! additionally reports the minimum translation vector, which requires
//! scanning every axis for the smallest overlap.
//!
//! All state is per-call scratch; nothing is stored on the polygons.

use log::trace;

use crate::foundation::math::Vec2;
use crate::geometry::{Polygon, Rect};

// Axes shorter than this before normalization come from coincident
// consecutive vertices and are skipped.
const AXIS_EPSILON: f32 = 1e-6;

/// Minimum translation vector of an overlapping polygon pair
///
/// Returned by [`intersection`]; the caller separates the shapes by moving
/// the first polygon by [`Penetration::translation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit separation axis, pointing from the second polygon's center
    /// toward the first's
    pub axis: Vec2,
    /// Overlap depth along `axis`
    pub depth: f32,
}

impl Penetration {
    /// Displacement that pushes the first polygon out of the second
    pub fn translation(&self) -> Vec2 {
        self.axis * self.depth
    }
}

/// Tests whether two polygons intersect
///
/// Returns `false` when either polygon is empty. Exits on the first
/// separating axis found.
pub fn intersects(a: &Polygon, b: &Polygon) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let edges_a = a.edges();
    let edges_b = b.edges();

    for edge in edges_a.iter().chain(edges_b.iter()) {
        let Some(axis) = projection_axis(*edge) else {
            continue;
        };

        let (min_a, max_a) = project(a.vertices(), axis);
        let (min_b, max_b) = project(b.vertices(), axis);

        if interval_distance(min_a, max_a, min_b, max_b) > 0.0 {
            trace!("separating axis ({}, {})", axis.x, axis.y);
            return false;
        }
    }

    true
}

/// Computes the minimum translation vector of two overlapping polygons
///
/// Returns `None` when the polygons do not intersect (or either is empty).
/// The axis points from `b`'s center toward `a`'s center, so applying
/// [`Penetration::translation`] to `a` pushes the shapes apart.
pub fn intersection(a: &Polygon, b: &Polygon) -> Option<Penetration> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let edges_a = a.edges();
    let edges_b = b.edges();

    let mut min_distance = f32::INFINITY;
    let mut translation_axis = Vec2::zeros();

    for edge in edges_a.iter().chain(edges_b.iter()) {
        let Some(axis) = projection_axis(*edge) else {
            continue;
        };

        let (min_a, max_a) = project(a.vertices(), axis);
        let (min_b, max_b) = project(b.vertices(), axis);

        let distance = interval_distance(min_a, max_a, min_b, max_b);
        if distance > 0.0 {
            return None;
        }

        let distance = distance.abs();
        if distance < min_distance {
            min_distance = distance;
            translation_axis = axis;

            // Point the axis from b's center toward a's
            let centers = a.center() - b.center();
            if centers.dot(&translation_axis) < 0.0 {
                translation_axis = -translation_axis;
            }
        }
    }

    // Every candidate axis was degenerate
    if !min_distance.is_finite() {
        return None;
    }

    trace!(
        "minimum translation axis ({}, {}), depth {}",
        translation_axis.x,
        translation_axis.y,
        min_distance
    );

    Some(Penetration {
        axis: translation_axis,
        depth: min_distance,
    })
}

/// Tests whether a polygon intersects an axis-aligned rectangle
///
/// True immediately when the rectangle contains any polygon vertex;
/// otherwise the rectangle is converted to a four-vertex polygon and tested
/// with [`intersects`].
pub fn intersects_rect(polygon: &Polygon, rect: &Rect) -> bool {
    if polygon.vertices().iter().any(|vertex| rect.contains(*vertex)) {
        return true;
    }

    intersects(polygon, &rect.to_polygon())
}

// Perpendicular of the edge, normalized. None for a degenerate edge.
fn projection_axis(edge: Vec2) -> Option<Vec2> {
    let axis = Vec2::new(-edge.y, edge.x);
    if axis.magnitude_squared() < AXIS_EPSILON {
        return None;
    }

    Some(axis.normalize())
}

// Projects the vertices onto the axis as a [min, max] interval.
fn project(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = axis.dot(&vertices[0]);
    let mut max = min;

    for vertex in &vertices[1..] {
        let d = axis.dot(vertex);
        if d < min {
            min = d;
        } else if d > max {
            max = d;
        }
    }

    (min, max)
}

// Signed gap between [min_a, max_a] and [min_b, max_b]; negative when the
// intervals overlap.
fn interval_distance(min_a: f32, max_a: f32, min_b: f32, max_b: f32) -> f32 {
    if min_a < min_b {
        min_b - max_a
    } else {
        min_a - max_b
    }
}

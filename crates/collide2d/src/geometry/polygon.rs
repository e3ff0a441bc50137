//! Convex polygon entity
//!
//! Stores an ordered vertex list and derives the edge list on demand. Any
//! vertex mutation marks the edge cache stale; the next edge read rebuilds it.
//! The cache sits behind interior mutability so queries take `&self`, which
//! makes the type `!Sync`. Collision tests are expected to run on the game
//! loop thread.

use std::cell::{Cell, RefCell};

use crate::collision::sat;
use crate::foundation::math::Vec2;
use crate::geometry::Rect;

/// Geometry construction errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A polygon requires at least two vertices
    #[error("polygon requires at least 2 vertices, got {given}")]
    TooFewVertices {
        /// The vertex count that was supplied
        given: usize,
    },
}

/// A polygon described by two or more ordered vertices
///
/// The edge list satisfies `edge[i] = vertex[(i + 1) % n] - vertex[i]` and is
/// rebuilt lazily after mutation. Equality compares vertex sequences in order;
/// two polygons describing the same shape with rotated vertex order are not
/// equal.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    edges: RefCell<Vec<Vec2>>,
    edges_stale: Cell<bool>,
}

impl Polygon {
    /// Creates an empty polygon with no vertices
    ///
    /// Every intersection test against an empty polygon reports `false`.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: RefCell::new(Vec::new()),
            edges_stale: Cell::new(true),
        }
    }

    /// Creates a polygon with `count` zero-initialized vertices
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if `count < 2`.
    pub fn with_vertex_count(count: usize) -> Result<Self, GeometryError> {
        if count < 2 {
            return Err(GeometryError::TooFewVertices { given: count });
        }

        Ok(Self {
            vertices: vec![Vec2::zeros(); count],
            edges: RefCell::new(Vec::with_capacity(count)),
            edges_stale: Cell::new(true),
        })
    }

    /// Creates a polygon from a vertex list
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if fewer than two vertices
    /// are supplied.
    pub fn from_vertices(vertices: &[Vec2]) -> Result<Self, GeometryError> {
        if vertices.len() < 2 {
            return Err(GeometryError::TooFewVertices { given: vertices.len() });
        }

        let mut polygon = Self::new();
        polygon.replace_vertices(vertices);
        Ok(polygon)
    }

    /// Replaces all vertices
    ///
    /// Resizes the backing storage when the count changes and marks the edge
    /// cache stale.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if fewer than two vertices
    /// are supplied.
    pub fn set(&mut self, vertices: &[Vec2]) -> Result<(), GeometryError> {
        if vertices.len() < 2 {
            return Err(GeometryError::TooFewVertices { given: vertices.len() });
        }

        self.replace_vertices(vertices);
        Ok(())
    }

    // Unvalidated bulk replace shared with the rectangle conversions, which
    // always supply exactly four corners.
    pub(crate) fn replace_vertices(&mut self, vertices: &[Vec2]) {
        self.vertices.clear();
        self.vertices.extend_from_slice(vertices);
        self.edges_stale.set(true);
    }

    /// Returns the vertex at `index`
    ///
    /// Panics if `index` is out of range, as slice indexing does.
    pub fn vertex(&self, index: usize) -> Vec2 {
        self.vertices[index]
    }

    /// Replaces the vertex at `index` and marks the edge cache stale
    ///
    /// Panics if `index` is out of range, as slice indexing does.
    pub fn set_vertex(&mut self, index: usize, vertex: Vec2) {
        self.vertices[index] = vertex;
        self.edges_stale.set(true);
    }

    /// The ordered vertex list
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Returns a copy of the edge list, rebuilding it first when stale
    ///
    /// The returned vector is independent storage; mutating it does not
    /// affect the polygon.
    pub fn edges(&self) -> Vec<Vec2> {
        self.ensure_edges();
        self.edges.borrow().clone()
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the polygon has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Arithmetic mean of the vertices
    ///
    /// Requires at least one vertex; the components are NaN for an empty
    /// polygon.
    pub fn center(&self) -> Vec2 {
        let mut total = Vec2::zeros();
        for vertex in &self.vertices {
            total += *vertex;
        }

        total / self.vertices.len() as f32
    }

    /// Translates every vertex by `(x, y)` and marks the edge cache stale
    pub fn offset(&mut self, x: f32, y: f32) {
        for vertex in &mut self.vertices {
            vertex.x += x;
            vertex.y += y;
        }

        self.edges_stale.set(true);
    }

    /// Translates every vertex by `delta`
    pub fn offset_by(&mut self, delta: Vec2) {
        self.offset(delta.x, delta.y);
    }

    /// Tests intersection with another polygon using the SAT engine
    pub fn intersects(&self, other: &Polygon) -> bool {
        sat::intersects(self, other)
    }

    /// Tests intersection with an axis-aligned rectangle
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        sat::intersects_rect(self, rect)
    }

    // Rebuilds the edge cache when stale. Pure over the vertex list and
    // idempotent.
    fn ensure_edges(&self) {
        if !self.edges_stale.get() {
            return;
        }

        let mut edges = self.edges.borrow_mut();
        edges.clear();

        let count = self.vertices.len();
        for i in 0..count {
            let next = self.vertices[(i + 1) % count];
            edges.push(next - self.vertices[i]);
        }

        self.edges_stale.set(false);
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    fn unit_square() -> Polygon {
        Polygon::from_vertices(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_construction_requires_two_vertices() {
        assert_eq!(
            Polygon::with_vertex_count(1),
            Err(GeometryError::TooFewVertices { given: 1 })
        );
        assert_eq!(
            Polygon::from_vertices(&[Vec2::zeros()]),
            Err(GeometryError::TooFewVertices { given: 1 })
        );

        let mut polygon = unit_square();
        assert_eq!(
            polygon.set(&[]),
            Err(GeometryError::TooFewVertices { given: 0 })
        );
    }

    #[test]
    fn test_edge_count_matches_vertex_count() {
        let polygon = unit_square();
        assert_eq!(polygon.edges().len(), polygon.len());

        let triangle = Polygon::from_vertices(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 2.0),
        ])
        .unwrap();
        assert_eq!(triangle.edges().len(), 3);
    }

    #[test]
    fn test_edges_wrap_around() {
        let polygon = unit_square();
        let edges = polygon.edges();

        assert_eq!(edges[0], Vec2::new(1.0, 0.0));
        assert_eq!(edges[1], Vec2::new(0.0, 1.0));
        assert_eq!(edges[2], Vec2::new(-1.0, 0.0));
        // Last edge closes the loop back to the first vertex
        assert_eq!(edges[3], Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_zero_count_constructor_rebuilds_edges() {
        let mut polygon = Polygon::with_vertex_count(3).unwrap();
        polygon.set_vertex(1, Vec2::new(4.0, 0.0));

        let edges = polygon.edges();
        assert_eq!(edges[0], Vec2::new(4.0, 0.0));
        assert_eq!(edges[1], Vec2::new(-4.0, 0.0));
    }

    #[test]
    fn test_set_vertex_invalidates_edges() {
        let mut polygon = unit_square();
        assert_eq!(polygon.edges()[0], Vec2::new(1.0, 0.0));

        polygon.set_vertex(1, Vec2::new(2.0, 0.0));
        assert_eq!(polygon.edges()[0], Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_set_resizes_storage() {
        let mut polygon = unit_square();
        polygon
            .set(&[Vec2::zeros(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)])
            .unwrap();

        assert_eq!(polygon.len(), 3);
        assert_eq!(polygon.edges().len(), 3);
    }

    #[test]
    fn test_offset_round_trip() {
        let mut polygon = unit_square();
        let original = polygon.vertices().to_vec();

        polygon.offset(3.5, -2.25);
        polygon.offset(-3.5, 2.25);

        for (restored, expected) in polygon.vertices().iter().zip(&original) {
            assert_relative_eq!(restored.x, expected.x, epsilon = EPSILON);
            assert_relative_eq!(restored.y, expected.y, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_offset_moves_edges_nowhere() {
        // Translation changes vertices but leaves edge vectors intact
        let mut polygon = unit_square();
        let before = polygon.edges();

        polygon.offset(10.0, 20.0);

        assert_eq!(polygon.edges(), before);
    }

    #[test]
    fn test_center_is_vertex_mean() {
        let polygon = unit_square();
        let center = polygon.center();

        assert_relative_eq!(center.x, 0.5, epsilon = EPSILON);
        assert_relative_eq!(center.y, 0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_empty_polygon() {
        let empty = Polygon::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.edges().is_empty());

        assert!(!unit_square().is_empty());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = unit_square();
        let b = unit_square();
        assert_eq!(a, b);

        // Same shape, rotated vertex order
        let rotated = Polygon::from_vertices(&[
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_ne!(a, rotated);

        let triangle = Polygon::from_vertices(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
        ])
        .unwrap();
        assert_ne!(a, triangle);
    }

    #[test]
    fn test_edges_copy_is_independent() {
        let polygon = unit_square();
        let mut copy = polygon.edges();
        copy[0] = Vec2::new(99.0, 99.0);

        assert_eq!(polygon.edges()[0], Vec2::new(1.0, 0.0));
    }
}

//! # collide2d
//!
//! 2D convex collision detection for games.
//!
//! ## Features
//!
//! - **Polygon entity**: ordered vertices with a lazily rebuilt edge list
//! - **SAT engine**: separating-axis intersection tests with an optional
//!   minimum-translation-vector result for collision response
//! - **Closed-form tests**: circle-circle, circle-rectangle
//! - **Axial push-out**: displacement to separate overlapping rectangles
//!
//! ## Quick Start
//!
//! ```rust
//! use collide2d::prelude::*;
//!
//! let a = Rect::new(0.0, 0.0, 1.0, 1.0).to_polygon();
//! let mut b = Rect::new(0.0, 0.0, 1.0, 1.0).to_polygon();
//! b.offset(0.5, 0.5);
//!
//! assert!(a.intersects(&b));
//! let push = collide2d::collision::sat::intersection(&a, &b).unwrap();
//! assert!(push.depth > 0.0);
//! ```
//!
//! All computation is synchronous and CPU-bound; the library is intended to
//! be driven from a single-threaded game update loop. [`Polygon`] caches its
//! edge list behind interior mutability and is deliberately not `Sync`.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collision;
pub mod foundation;
pub mod geometry;

pub use collision::sat::Penetration;
pub use geometry::{Circle, GeometryError, HitBox, Polygon, Rect};

/// Common imports for library users
pub mod prelude {
    pub use crate::collision::sat::Penetration;
    pub use crate::foundation::math::Vec2;
    pub use crate::geometry::{Circle, GeometryError, HitBox, Polygon, Rect};
}

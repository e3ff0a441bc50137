//! Geometric primitives for 2D collision detection
//!
//! # Module Organization
//!
//! - [`polygon`] - Convex polygon entity with a lazily rebuilt edge list
//! - [`circle`] - Circle primitive with closed-form intersection tests
//! - [`rect`] - Axis-aligned rectangle with polygon conversion and push-out
//! - [`hitbox`] - Collision metadata attached to a rectangle
//!
//! # Key Types
//!
//! - [`Polygon`] - The entity the SAT engine operates on
//! - [`Circle`], [`Rect`] - Closed-form intersection primitives
//! - [`HitBox`] - Gameplay-facing collision metadata

pub mod circle;
pub mod hitbox;
pub mod polygon;
pub mod rect;

// Re-export commonly used types
pub use circle::Circle;
pub use hitbox::HitBox;
pub use polygon::{GeometryError, Polygon};
pub use rect::Rect;

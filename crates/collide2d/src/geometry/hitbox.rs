//! Collision metadata attached to a rectangle
//!
//! A hit box pairs an axis-aligned bounds with the gameplay switches a
//! collision consumer needs: whether the box collides at all, whether it
//! takes or inflicts damage, and six opaque tag bytes game code can use for
//! its own bookkeeping. The library itself never interprets any of these.

use crate::foundation::math::utils;
use crate::geometry::Rect;

/// A 2D collision box with gameplay metadata
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitBox {
    /// Position and size of the box
    pub bounds: Rect,
    /// Whether the box participates in collision at all
    pub can_collide: bool,
    /// Whether the box takes damage when hit
    pub can_take_damage: bool,
    /// Fraction of incoming damage applied, in `[0, 1]`
    pub damage_percentage: f32,
    /// Whether the box inflicts damage on contact
    pub can_inflict_damage: bool,
    /// Damage dealt when `can_inflict_damage` is set
    pub damage_power: i32,
    /// Opaque tag slots for game-side bookkeeping
    pub tags: [u8; 6],
}

impl HitBox {
    /// Creates a passive hit box over the given bounds
    ///
    /// All switches start off and damage values at zero.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Creates a hit box with full damage configuration
    ///
    /// `damage_percentage` is clamped into `[0, 1]`.
    pub fn with_damage(
        bounds: Rect,
        can_collide: bool,
        can_take_damage: bool,
        damage_percentage: f32,
        can_inflict_damage: bool,
        damage_power: i32,
    ) -> Self {
        Self {
            bounds,
            can_collide,
            can_take_damage,
            damage_percentage: utils::clamp(damage_percentage, 0.0, 1.0),
            can_inflict_damage,
            damage_power,
            tags: [0; 6],
        }
    }

    /// Returns the hit box with the given tag slots
    pub fn with_tags(mut self, tags: [u8; 6]) -> Self {
        self.tags = tags;
        self
    }
}

//! Math utilities and types
//!
//! Provides the fundamental 2D math types the collision primitives build on.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::*;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Rotate a point around an origin by an angle in radians
    ///
    /// Standard 2D rotation:
    ///
    /// ```text
    /// x' = (x - ox) * cos(a) - (y - oy) * sin(a) + ox
    /// y' = (y - oy) * cos(a) + (x - ox) * sin(a) + oy
    /// ```
    pub fn rotate_point(point: Vec2, origin: Vec2, radians: f32) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        let dx = point.x - origin.x;
        let dy = point.y - origin.y;

        Vec2::new(
            dx * cos - dy * sin + origin.x,
            dy * cos + dx * sin + origin.y,
        )
    }

    /// Unit vector pointing from `position` toward `destination`
    ///
    /// The two positions must not coincide.
    pub fn direction(position: Vec2, destination: Vec2) -> Vec2 {
        (destination - position).normalize()
    }
}

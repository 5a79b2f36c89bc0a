//! Math utilities and types
//!
//! Provides the 2D math types used by entities, layers and touch routing.

pub use nalgebra::{Matrix4, Vector2, Vector3};

use std::f64::consts::TAU;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Number of integer angle units in one full turn
pub const ANGLE_TURN_INT: i32 = 0x10000;

/// Axis-aligned rectangle in game units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point lies inside the rectangle
    ///
    /// The test is half-open: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, point_x: f32, point_y: f32) -> bool {
        point_x >= self.x && point_x < self.right() &&
        point_y >= self.y && point_y < self.bottom()
    }
}

/// Convert an integer angle in `[0, 0x10000)` to radians
///
/// Values outside the domain wrap around.
pub fn int_angle_to_radians(angle: i32) -> f64 {
    let wrapped = angle.rem_euclid(ANGLE_TURN_INT);
    f64::from(wrapped) / f64::from(ANGLE_TURN_INT) * TAU
}

/// Convert a fractional angle in `[0, 1)` to radians
///
/// Values outside the domain wrap around.
pub fn turn_fraction_to_radians(angle: f32) -> f32 {
    angle.rem_euclid(1.0) * std::f32::consts::TAU
}

/// Split an integer magnitude and integer angle into axis components
///
/// Components are rounded to the nearest integer.
#[allow(clippy::cast_possible_truncation)]
pub fn polar_to_axes_int(magnitude: i32, angle: i32) -> (i32, i32) {
    let theta = int_angle_to_radians(angle);
    let magnitude = f64::from(magnitude);
    (
        (magnitude * theta.cos()).round() as i32,
        (magnitude * theta.sin()).round() as i32,
    )
}

/// Split a float magnitude and turn-fraction angle into axis components
pub fn polar_to_axes(magnitude: f32, angle: f32) -> (f32, f32) {
    let theta = turn_fraction_to_radians(angle);
    (magnitude * theta.cos(), magnitude * theta.sin())
}

/// Translation matrix for a 2D offset
pub fn translation_2d(offset: Vec2) -> Mat4 {
    Mat4::new_translation(&Vector3::new(offset.x, offset.y, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 5.0, 5.0);

        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(14.9, 24.9));
        assert!(!rect.contains(15.0, 22.0));
        assert!(!rect.contains(12.0, 25.0));
        assert!(!rect.contains(9.9, 22.0));
    }

    #[test]
    fn test_zero_sized_rect_contains_nothing() {
        let rect = Rect::new(3.0, 3.0, 0.0, 0.0);
        assert!(!rect.contains(3.0, 3.0));
    }

    #[test]
    fn test_int_polar_quarter_turns() {
        assert_eq!(polar_to_axes_int(100, 0), (100, 0));
        assert_eq!(polar_to_axes_int(100, 0x4000), (0, 100));
        assert_eq!(polar_to_axes_int(100, 0x8000), (-100, 0));
        assert_eq!(polar_to_axes_int(100, 0xC000), (0, -100));
    }

    #[test]
    fn test_int_angle_wraps() {
        assert_eq!(polar_to_axes_int(50, ANGLE_TURN_INT + 0x4000), (0, 50));
        assert_eq!(polar_to_axes_int(50, -0x4000), (0, -50));
    }

    #[test]
    fn test_float_polar_quarter_turns() {
        let (x, y) = polar_to_axes(2.0, 0.25);
        assert_relative_eq!(x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(y, 2.0, epsilon = 1e-5);

        let (x, y) = polar_to_axes(2.0, 0.5);
        assert_relative_eq!(x, -2.0, epsilon = 1e-5);
        assert_relative_eq!(y, 0.0, epsilon = 1e-5);

        let (x, y) = polar_to_axes(2.0, 1.25);
        assert_relative_eq!(x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_translation_2d() {
        let m = translation_2d(Vec2::new(-4.0, 6.0));
        assert_relative_eq!(m[(0, 3)], -4.0);
        assert_relative_eq!(m[(1, 3)], 6.0);
        assert_relative_eq!(m[(2, 3)], 0.0);
    }
}

//! Collision detection for input processing
//!
//! Hit testing for touch routing - determining which drawables the user
//! touched.

use crate::foundation::math::Rect;
use crate::render::DrawableObject;

/// Check if a point is inside a rectangular region
///
/// # Arguments
/// * `point_x` - X coordinate of the point
/// * `point_y` - Y coordinate of the point
/// * `rect` - Region to test against
///
/// # Returns
/// `true` if the point is inside the rectangle. The left and top edges
/// count as inside, the right and bottom edges do not.
pub fn point_in_rect(point_x: f32, point_y: f32, rect: &Rect) -> bool {
    rect.contains(point_x, point_y)
}

/// Check whether a drawable should receive a touch at the given point
///
/// The object must be alive, marked touchable, and contain the point.
pub fn touches_object(object: &dyn DrawableObject, point_x: f32, point_y: f32) -> bool {
    !object.is_dead() && object.is_touchable() && point_in_rect(point_x, point_y, &object.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Sprite;

    #[test]
    fn test_point_in_rect() {
        let rect = Rect::new(100.0, 100.0, 200.0, 100.0);

        // Point inside
        assert!(point_in_rect(150.0, 150.0, &rect));

        // Top-left edge is inside
        assert!(point_in_rect(100.0, 100.0, &rect));

        // Bottom-right edge is outside
        assert!(!point_in_rect(300.0, 150.0, &rect));
        assert!(!point_in_rect(150.0, 200.0, &rect));

        // Point outside
        assert!(!point_in_rect(50.0, 50.0, &rect));
        assert!(!point_in_rect(350.0, 250.0, &rect));
    }

    #[test]
    fn test_touches_object_requires_touchable() {
        let sprite = Sprite::new(0.0, 0.0, 10.0, 10.0);
        assert!(!touches_object(&sprite, 5.0, 5.0));

        let sprite = sprite.touchable();
        assert!(touches_object(&sprite, 5.0, 5.0));
        assert!(!touches_object(&sprite, 10.0, 5.0));
    }

    #[test]
    fn test_touches_object_skips_dead() {
        let mut sprite = Sprite::new(0.0, 0.0, 10.0, 10.0).touchable();
        sprite.entity_mut().remove();
        assert!(!touches_object(&sprite, 5.0, 5.0));
    }
}

//! Scene window (viewport)

use crate::foundation::math::{translation_2d, Mat4, Rect, Vec2};

/// Visible region of a scene in game units
///
/// When a scene has an active window its top-left corner is mapped to the
/// surface origin; without one the scene is drawn with a static identity view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// Left edge of the visible region
    pub x: f32,
    /// Top edge of the visible region
    pub y: f32,
    /// Visible width
    pub width: f32,
    /// Visible height
    pub height: f32,
}

impl Window {
    /// Create a window
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Move the window so its top-left corner sits at `(x, y)`
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Visible region as a rectangle
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Model-view matrix that scrolls the scene by this window
    pub fn view_matrix(&self) -> Mat4 {
        translation_2d(Vec2::new(-self.x, -self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_view_matrix_scrolls_opposite_to_window() {
        let mut window = Window::new(0.0, 0.0, 320.0, 240.0);
        window.move_to(100.0, 50.0);

        let m = window.view_matrix();
        assert_relative_eq!(m[(0, 3)], -100.0);
        assert_relative_eq!(m[(1, 3)], -50.0);
        assert!(window.bounds().contains(100.0, 50.0));
        assert!(!window.bounds().contains(420.0, 50.0));
    }
}

//! Touch events
//!
//! Hosts translate their pointer input into [`TouchEvent`]s and hand them to
//! the scene director. The scene rewrites the event location into game units
//! before anything sees it.

use crate::core::config::DeviceMetrics;

/// Phase of a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger touched the screen
    Down,
    /// Finger lifted
    Up,
    /// Finger moved while down
    Move,
    /// Gesture cancelled by the host
    Cancel,
    /// Any other host action code
    Other(u32),
}

/// A single pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    phase: TouchPhase,
    x: f32,
    y: f32,
    pointer_id: u32,
}

impl TouchEvent {
    /// Create an event for the primary pointer
    pub const fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y, pointer_id: 0 }
    }

    /// Touch-down at `(x, y)`
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Down, x, y)
    }

    /// Touch-up at `(x, y)`
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Up, x, y)
    }

    /// Move to `(x, y)`
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Move, x, y)
    }

    /// Attach the host's pointer id
    pub const fn with_pointer_id(mut self, pointer_id: u32) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    /// Event phase
    pub const fn phase(&self) -> TouchPhase {
        self.phase
    }

    /// Current x coordinate
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Current y coordinate
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Host pointer id
    pub const fn pointer_id(&self) -> u32 {
        self.pointer_id
    }

    /// Rewrite the event location
    pub fn set_location(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Rewrite the location by the metrics' per-axis scale factors
    pub fn apply_metrics(&mut self, metrics: &DeviceMetrics) {
        let (scale_x, scale_y) = metrics.scale_factors();
        self.set_location(self.x * scale_x, self.y * scale_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constructors_set_phase() {
        assert_eq!(TouchEvent::down(1.0, 2.0).phase(), TouchPhase::Down);
        assert_eq!(TouchEvent::up(1.0, 2.0).phase(), TouchPhase::Up);
        assert_eq!(TouchEvent::moved(1.0, 2.0).phase(), TouchPhase::Move);
        assert_eq!(TouchEvent::down(0.0, 0.0).with_pointer_id(3).pointer_id(), 3);
    }

    #[test]
    fn test_apply_metrics_scales_each_axis() {
        let mut event = TouchEvent::down(10.0, 10.0);
        event.apply_metrics(&DeviceMetrics::new(960.0, 320.0, 480.0, 320.0));

        assert_relative_eq!(event.x(), 20.0);
        assert_relative_eq!(event.y(), 10.0);
    }
}

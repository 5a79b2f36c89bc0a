//! Input handling
//!
//! Touch events and the hit testing used to route them to drawables.

pub mod collision;
pub mod touch;

pub use touch::{TouchEvent, TouchPhase};

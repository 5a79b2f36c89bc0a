//! Cross-module scene tests
//!
//! Behavior that spans composition, touch routing and the director.

mod frame_integration;

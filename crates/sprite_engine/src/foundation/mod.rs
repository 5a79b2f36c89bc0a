//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - 2D math types and angle conversions
//! - Logging utilities
//! - Trait object downcasting

pub mod math;
pub mod logging;
pub mod any;

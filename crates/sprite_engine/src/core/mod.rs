//! # Core Engine Module
//!
//! Shared configuration types used by scenes, the scene director and host
//! applications.
//!
//! ## Organization
//!
//! - **Config**: display metrics, scene layout and engine settings

pub mod config;

// Re-export commonly used config types
pub use config::{
    Config,
    ConfigError,
    DeviceMetrics,
    EngineConfig,
    SceneConfig,
};

//! # Engine Configuration
//!
//! Configuration for the display metrics used by touch routing, the layer
//! layout of new scenes, and engine-wide settings such as the log filter.
//!
//! All types serialize through [`Config`], so they can be stored as TOML or RON.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Default number of layers in a scene
pub const DEFAULT_LAYER_COUNT: usize = 1;

/// Default number of drawable object slots per layer
pub const DEFAULT_LAYER_OBJECT_COUNT: usize = 32;

/// Default number of diagnostics a scene keeps around
pub const DEFAULT_DIAGNOSTIC_HISTORY: usize = 64;

/// # Device Metrics
///
/// Physical screen size in pixels and the logical game resolution. Every
/// incoming touch coordinate is multiplied by the per-axis ratio
/// `device pixels / game units`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetrics {
    /// Device width in pixels
    pub device_width_px: f32,
    /// Device height in pixels
    pub device_height_px: f32,
    /// Logical game width
    pub game_width: f32,
    /// Logical game height
    pub game_height: f32,
}

impl DeviceMetrics {
    /// Create metrics from device pixel dimensions and logical game dimensions
    pub const fn new(device_width_px: f32, device_height_px: f32, game_width: f32, game_height: f32) -> Self {
        Self {
            device_width_px,
            device_height_px,
            game_width,
            game_height,
        }
    }

    /// Metrics where device pixels and game units coincide
    pub const fn identity(width: f32, height: f32) -> Self {
        Self::new(width, height, width, height)
    }

    /// Per-axis scale factors applied to touch coordinates
    ///
    /// An axis with a non-positive logical dimension scales by 1.0.
    pub fn scale_factors(&self) -> (f32, f32) {
        let axis = |device: f32, game: f32| if game > 0.0 { device / game } else { 1.0 };
        (
            axis(self.device_width_px, self.game_width),
            axis(self.device_height_px, self.game_height),
        )
    }

    /// Validate that every dimension is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("device_width_px", self.device_width_px),
            ("device_height_px", self.device_height_px),
            ("game_width", self.game_width),
            ("game_height", self.game_height),
        ];
        for (name, value) in dims {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        Ok(())
    }
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        Self::identity(480.0, 320.0)
    }
}

/// # Scene Configuration
///
/// Layer layout for scenes built with `Scene::from_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Object capacity of each layer; the length is the layer count
    pub layer_capacities: Vec<usize>,
    /// How many diagnostics the scene keeps for inspection
    pub diagnostic_history: usize,
}

impl SceneConfig {
    /// Layout with `layer_count` layers of equal capacity
    pub fn uniform(layer_count: usize, capacity: usize) -> Self {
        Self {
            layer_capacities: vec![capacity; layer_count],
            ..Self::default()
        }
    }

    /// Number of layers described by this layout
    pub fn layer_count(&self) -> usize {
        self.layer_capacities.len()
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layer_capacities: vec![DEFAULT_LAYER_OBJECT_COUNT; DEFAULT_LAYER_COUNT],
            diagnostic_history: DEFAULT_DIAGNOSTIC_HISTORY,
        }
    }
}

/// # Engine Configuration
///
/// Top-level configuration consumed by the scene director and the demo app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default `env_logger` filter
    pub log_level: String,
    /// Display metrics for touch scaling
    pub display: DeviceMetrics,
    /// Default scene layout
    pub scene: SceneConfig,
}

impl EngineConfig {
    /// Replace the display metrics
    pub fn with_display(mut self, display: DeviceMetrics) -> Self {
        self.display = display;
        self
    }

    /// Replace the scene layout
    pub fn with_scene(mut self, scene: SceneConfig) -> Self {
        self.scene = scene;
        self
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()?;
        if self.scene.layer_capacities.is_empty() {
            return Err(ConfigError::Invalid("scene needs at least one layer".to_string()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            display: DeviceMetrics::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl Config for EngineConfig {}

//! Scene error types

use thiserror::Error;

/// Reasons a scene or layer operation was rejected
///
/// A rejected operation leaves the scene exactly as it was. Scene methods
/// also report each rejection on the scene's diagnostic channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Layer index outside `[0, layer_count)`
    #[error("Invalid layer index {index}, layer count is {layer_count}")]
    InvalidLayerIndex {
        /// Requested index
        index: usize,
        /// Number of layers in the scene
        layer_count: usize,
    },

    /// Move or switch of a layer onto its own position
    #[error("Layer {index} cannot be moved or switched onto itself")]
    SameLayer {
        /// Requested index
        index: usize,
    },

    /// Every slot of a layer is occupied by a live object
    #[error("Layer is full, capacity is {capacity}")]
    LayerFull {
        /// Layer capacity
        capacity: usize,
    },

    /// Every pending texture slot is taken
    #[error("Too many textures staged on the scene, maximum is {capacity}")]
    TextureSlotsFull {
        /// Number of texture slots
        capacity: usize,
    },

    /// Slot is empty or out of range
    #[error("No object in layer {layer} slot {slot}")]
    NoSuchObject {
        /// Layer index
        layer: usize,
        /// Slot index
        slot: usize,
    },
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

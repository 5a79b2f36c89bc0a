//! Pending texture slots
//!
//! Textures a scene needs are staged here before the scene becomes active
//! and uploaded in one go when the director first runs a frame for it.

use crate::render::Texture;
use crate::scene::error::{SceneError, SceneResult};

/// Number of textures a scene can stage
pub const SCENE_TEXTURE_COUNT: usize = 32;

/// Fixed-capacity array of textures waiting for upload
#[derive(Debug, Clone)]
pub struct TextureSlots {
    slots: Vec<Option<Texture>>,
}

impl TextureSlots {
    /// Create `capacity` empty slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Stage a texture in the first empty slot
    ///
    /// # Returns
    /// The slot index, or [`SceneError::TextureSlotsFull`] when every slot
    /// is taken (the texture is not staged)
    pub fn push(&mut self, texture: Texture) -> SceneResult<usize> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(SceneError::TextureSlotsFull { capacity })?;
        self.slots[slot] = Some(texture);
        Ok(slot)
    }

    /// Staged textures in slot order
    pub fn pending(&self) -> impl Iterator<Item = &Texture> {
        self.slots.iter().flatten()
    }

    /// Number of staged textures
    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    /// Empty every slot, returning the staged textures in slot order
    pub fn take_all(&mut self) -> Vec<Texture> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }
}

impl Default for TextureSlots {
    fn default() -> Self {
        Self::with_capacity(SCENE_TEXTURE_COUNT)
    }
}

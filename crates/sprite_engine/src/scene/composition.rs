//! Scene composition
//!
//! Construction, layer management, texture staging and the active window.
//! Every index-taking operation validates against `[0, layer_count)`; a
//! rejected call reports on the diagnostic channel, returns an error and
//! leaves the scene untouched.

use crate::core::config::{SceneConfig, DEFAULT_LAYER_COUNT, DEFAULT_LAYER_OBJECT_COUNT};
use crate::debug::Diagnostics;
use crate::render::{DrawableObject, Texture, Window};
use crate::scene::error::{SceneError, SceneResult};
use crate::scene::handler::ObjectRef;
use crate::scene::layer::Layer;
use crate::scene::texture_slots::TextureSlots;

/// Ordered stack of layers plus the textures and window they need
///
/// The layer count is fixed at construction. Layers are drawn in ascending
/// index order, so layer 0 is at the back.
#[derive(Debug)]
pub struct Scene {
    pub(super) layers: Vec<Layer>,
    pub(super) textures: TextureSlots,
    pub(super) window: Option<Window>,
    pub(super) loaded_textures: bool,
    pub(super) diagnostics: Diagnostics,
}

impl Scene {
    /// Create a scene with one layer per entry of `capacities`
    ///
    /// Each entry is that layer's maximum object count.
    pub fn with_capacities(capacities: &[usize]) -> Self {
        Self {
            layers: capacities.iter().map(|&capacity| Layer::new(capacity)).collect(),
            textures: TextureSlots::default(),
            window: None,
            loaded_textures: false,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Create `layer_count` layers that all hold `capacity` objects
    pub fn with_uniform_capacity(layer_count: usize, capacity: usize) -> Self {
        Self::with_capacities(&vec![capacity; layer_count])
    }

    /// Create `layer_count` layers with the default capacity
    pub fn with_layers(layer_count: usize) -> Self {
        Self::with_uniform_capacity(layer_count, DEFAULT_LAYER_OBJECT_COUNT)
    }

    /// Create a scene from a configured layout
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut scene = Self::with_capacities(&config.layer_capacities);
        scene.diagnostics = Diagnostics::with_capacity(config.diagnostic_history);
        scene
    }

    /// Create a single-layer scene with the default capacity
    pub fn new() -> Self {
        Self::with_uniform_capacity(DEFAULT_LAYER_COUNT, DEFAULT_LAYER_OBJECT_COUNT)
    }

    /// Diagnostics reported by this scene
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Mutable diagnostics, for draining or clearing
    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn check_layer_index(&mut self, category: &'static str, index: usize) -> SceneResult<()> {
        let layer_count = self.layers.len();
        if index >= layer_count {
            let error = SceneError::InvalidLayerIndex { index, layer_count };
            self.diagnostics.warning(category, error.to_string());
            return Err(error);
        }
        Ok(())
    }

    fn reject(&mut self, category: &'static str, error: SceneError) -> SceneError {
        self.diagnostics.warning(category, error.to_string());
        error
    }

    // Layers

    /// Number of layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layer at `index`
    ///
    /// An invalid index is reported on the diagnostic channel and yields
    /// `None`, which is why this borrows the scene mutably. Use
    /// [`Scene::layers`] for a shared, unreported lookup.
    pub fn layer(&mut self, index: usize) -> Option<&Layer> {
        self.check_layer_index("scene.get_layer", index).ok()?;
        self.layers.get(index)
    }

    /// Mutable layer at `index`
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.check_layer_index("scene.get_layer", index).ok()?;
        self.layers.get_mut(index)
    }

    /// Every layer in draw order
    ///
    /// `layers().get(i)` looks a layer up without reporting a bad index.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Remove every object from every layer
    pub fn clear(&mut self) {
        self.layers.iter_mut().for_each(Layer::clear);
    }

    /// Remove every object from one layer
    pub fn clear_layer(&mut self, index: usize) -> SceneResult<()> {
        self.check_layer_index("scene.clear_layer", index)?;
        self.layers[index].clear();
        Ok(())
    }

    /// Replace the layer at `index`, returning the previous one
    pub fn set_layer(&mut self, index: usize, layer: Layer) -> SceneResult<Layer> {
        self.check_layer_index("scene.set_layer", index)?;
        Ok(std::mem::replace(&mut self.layers[index], layer))
    }

    /// Move the layer at `from` to `to`, shifting the layers in between by one
    pub fn move_layer(&mut self, from: usize, to: usize) -> SceneResult<()> {
        if from == to {
            return Err(self.reject("scene.move_layer", SceneError::SameLayer { index: from }));
        }
        self.check_layer_index("scene.move_layer", from)?;
        self.check_layer_index("scene.move_layer", to)?;

        let layer = self.layers.remove(from);
        self.layers.insert(to, layer);
        Ok(())
    }

    /// Swap the layers at `a` and `b`
    pub fn switch_layers(&mut self, a: usize, b: usize) -> SceneResult<()> {
        if a == b {
            return Err(self.reject("scene.switch_layers", SceneError::SameLayer { index: a }));
        }
        self.check_layer_index("scene.switch_layers", a)?;
        self.check_layer_index("scene.switch_layers", b)?;

        self.layers.swap(a, b);
        Ok(())
    }

    // Objects

    /// Add an object to layer 0
    pub fn add<T: DrawableObject>(&mut self, object: T) -> SceneResult<ObjectRef> {
        self.add_to_layer(0, object)
    }

    /// Add an object to the layer at `layer_index`
    pub fn add_to_layer<T: DrawableObject>(&mut self, layer_index: usize, object: T) -> SceneResult<ObjectRef> {
        self.add_boxed(layer_index, Box::new(object))
    }

    /// Add an already boxed object to the layer at `layer_index`
    pub fn add_boxed(&mut self, layer_index: usize, object: Box<dyn DrawableObject>) -> SceneResult<ObjectRef> {
        self.check_layer_index("scene.add", layer_index)?;
        match self.layers[layer_index].add_boxed(object) {
            Ok(slot) => Ok(ObjectRef::new(layer_index, slot)),
            Err(error) => Err(self.reject("scene.add", error)),
        }
    }

    /// Object referenced by `target`
    pub fn object(&self, target: ObjectRef) -> Option<&dyn DrawableObject> {
        self.layers.get(target.layer)?.get(target.slot)
    }

    /// Mutable object referenced by `target`
    pub fn object_mut(&mut self, target: ObjectRef) -> Option<&mut dyn DrawableObject> {
        self.layers.get_mut(target.layer)?.get_mut(target.slot)
    }

    /// Mark the referenced object dead
    ///
    /// The slot stays populated until the layer reclaims it.
    pub fn remove(&mut self, target: ObjectRef) -> SceneResult<()> {
        match self.object_mut(target) {
            Some(object) => {
                object.entity_mut().remove();
                Ok(())
            }
            None => Err(self.reject(
                "scene.remove",
                SceneError::NoSuchObject { layer: target.layer, slot: target.slot },
            )),
        }
    }

    // Textures

    /// Stage a texture for upload when the scene becomes active
    ///
    /// Call this before handing the scene to the director. When every slot is
    /// taken the texture is dropped and the rejection reported.
    pub fn use_texture(&mut self, texture: Texture) -> SceneResult<usize> {
        match self.textures.push(texture) {
            Ok(slot) => Ok(slot),
            Err(error) => Err(self.reject("scene.use_texture", error)),
        }
    }

    /// Textures waiting for upload
    pub fn pending_textures(&self) -> &TextureSlots {
        &self.textures
    }

    /// Whether the staged textures have been uploaded for this activation
    pub fn textures_loaded(&self) -> bool {
        self.loaded_textures
    }

    // Window

    /// Make `window` the active window
    pub fn set_window(&mut self, window: Window) {
        self.window = Some(window);
    }

    /// Drop the active window, returning it
    ///
    /// Without a window the scene is drawn with a static identity view.
    pub fn remove_window(&mut self) -> Option<Window> {
        self.window.take()
    }

    /// Active window
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Mutable active window, for scrolling
    pub fn window_mut(&mut self) -> Option<&mut Window> {
        self.window.as_mut()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

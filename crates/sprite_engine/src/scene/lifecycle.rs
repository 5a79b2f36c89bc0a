//! Scene frame lifecycle
//!
//! Activation, texture upload, per-frame update and drawing. The director
//! calls these in order; hosts driving a scene by hand must do the same.

use log::{debug, info};

use crate::render::{MatrixMode, RenderSurface};
use crate::scene::Scene;

impl Scene {
    /// The scene became active
    ///
    /// Staged textures will be uploaded again on the next frame.
    pub fn on_set_scene(&mut self) {
        debug!("Scene activated with {} layers", self.layers.len());
        self.loaded_textures = false;
    }

    /// The scene stopped being active
    pub fn on_end_scene(&mut self) {
        debug!("Scene ended");
    }

    /// Upload every staged texture to `surface`
    ///
    /// Every slot is emptied whether or not its upload succeeded; failures
    /// are reported on the diagnostic channel. Sets the loaded flag.
    ///
    /// # Returns
    /// Number of textures uploaded successfully
    pub fn on_load_textures(&mut self, surface: &mut dyn RenderSurface) -> usize {
        let pending = self.textures.take_all();
        info!("Loading {} scene textures", pending.len());

        let total = pending.len();
        let mut loaded = 0;
        for texture in &pending {
            match texture.load(surface) {
                Ok(id) => {
                    debug!("Texture '{}' uploaded as {:?}", texture.name(), id);
                    loaded += 1;
                }
                Err(e) => self.diagnostics.warning("scene.load_textures", e.to_string()),
            }
        }

        if loaded < total {
            self.diagnostics
                .info("scene.load_textures", format!("{} of {} textures uploaded", loaded, total));
        }
        self.loaded_textures = true;
        loaded
    }

    /// Run `on_update` on every live object, layer by layer
    pub fn update(&mut self) {
        for layer in &mut self.layers {
            layer.update();
        }
    }

    /// Draw the scene
    ///
    /// Clears the color buffer, resets the model-view matrix, applies the
    /// active window's view transform and draws layers back to front.
    pub fn on_draw(&mut self, surface: &mut dyn RenderSurface) {
        surface.clear_color_buffer();
        surface.set_matrix_mode(MatrixMode::ModelView);
        surface.load_identity();
        if let Some(window) = &self.window {
            surface.mult_matrix(&window.view_matrix());
        }

        for layer in &mut self.layers {
            layer.draw(surface);
        }
    }
}

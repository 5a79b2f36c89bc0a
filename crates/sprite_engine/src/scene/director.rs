//! Scene director
//!
//! Owns the active scene and its handler and drives them from host
//! callbacks: one [`SceneDirector::on_frame`] per rendered frame, touch
//! events as they arrive, and the coarser game-loop tick.

use std::fmt;

use log::{debug, info};

use crate::core::config::{DeviceMetrics, EngineConfig};
use crate::input::TouchEvent;
use crate::render::RenderSurface;
use crate::scene::handler::SceneHandler;
use crate::scene::Scene;

/// A scene together with the handler that drives it
pub struct ActiveScene {
    /// Scene state
    pub scene: Scene,
    /// Scene behavior
    pub handler: Box<dyn SceneHandler>,
}

impl ActiveScene {
    /// Pair a scene with its handler
    pub fn new(scene: Scene, handler: Box<dyn SceneHandler>) -> Self {
        Self { scene, handler }
    }

    fn activate(&mut self) {
        self.scene.on_set_scene();
        self.handler.on_set_scene(&mut self.scene);
    }

    fn end(&mut self) {
        self.scene.on_end_scene();
        self.handler.on_end_scene(&mut self.scene);
    }
}

impl fmt::Debug for ActiveScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveScene").field("scene", &self.scene).finish_non_exhaustive()
    }
}

/// Frame driver for one scene at a time
#[derive(Debug)]
pub struct SceneDirector {
    metrics: DeviceMetrics,
    active: Option<ActiveScene>,
    frame_count: u64,
}

impl SceneDirector {
    /// Create a director with no active scene
    pub fn new(metrics: DeviceMetrics) -> Self {
        Self {
            metrics,
            active: None,
            frame_count: 0,
        }
    }

    /// Create a director from the display section of the engine config
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.display)
    }

    /// Display metrics used to scale touches
    pub fn metrics(&self) -> &DeviceMetrics {
        &self.metrics
    }

    /// Replace the display metrics, e.g. after a surface resize
    pub fn set_metrics(&mut self, metrics: DeviceMetrics) {
        self.metrics = metrics;
    }

    /// Frames driven since the director was created
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Active scene and handler
    pub fn active(&self) -> Option<&ActiveScene> {
        self.active.as_ref()
    }

    /// Active scene
    pub fn scene(&self) -> Option<&Scene> {
        self.active.as_ref().map(|active| &active.scene)
    }

    /// Mutable active scene
    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.active.as_mut().map(|active| &mut active.scene)
    }

    /// Active handler
    pub fn handler(&self) -> Option<&(dyn SceneHandler + 'static)> {
        self.active.as_ref().map(|active| &*active.handler)
    }

    /// Make `scene` the active scene
    ///
    /// The previous scene, if any, is ended first. The new scene's textures
    /// are uploaded on the next frame.
    ///
    /// # Returns
    /// The previously active scene and handler
    pub fn set_scene(&mut self, scene: Scene, handler: Box<dyn SceneHandler>) -> Option<ActiveScene> {
        let previous = self.end_scene();

        let mut next = ActiveScene::new(scene, handler);
        next.activate();
        info!("Scene set with {} layers", next.scene.layer_count());
        self.active = Some(next);

        previous
    }

    /// Re-activate a scene returned by an earlier [`SceneDirector::set_scene`]
    /// or [`SceneDirector::end_scene`]
    pub fn resume(&mut self, active: ActiveScene) -> Option<ActiveScene> {
        self.set_scene(active.scene, active.handler)
    }

    /// End the active scene and hand it back
    pub fn end_scene(&mut self) -> Option<ActiveScene> {
        let mut previous = self.active.take()?;
        previous.end();
        info!("Scene ended after frame {}", self.frame_count);
        Some(previous)
    }

    /// Drive one frame
    ///
    /// Uploads staged textures the first time the active scene runs, then
    /// updates and draws it. Does nothing without an active scene.
    pub fn on_frame(&mut self, surface: &mut dyn RenderSurface) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if !active.scene.textures_loaded() {
            active.scene.on_load_textures(surface);
        }

        active.handler.on_update(&mut active.scene);
        active.scene.update();
        active.scene.on_draw(surface);

        self.frame_count += 1;
        debug!("Frame {} done", self.frame_count);
    }

    /// Run the handler's periodic game-loop hook
    pub fn game_loop(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.handler.on_game_loop(&mut active.scene);
        }
    }

    /// Route a host touch event to the active scene
    ///
    /// The event is rewritten into game units in place.
    pub fn handle_touch(&mut self, event: &mut TouchEvent) {
        if let Some(active) = self.active.as_mut() {
            active.scene.handle_touch(&mut *active.handler, event, &self.metrics);
        }
    }
}

impl Default for SceneDirector {
    fn default() -> Self {
        Self::new(DeviceMetrics::default())
    }
}

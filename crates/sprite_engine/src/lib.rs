//! # Sprite Engine
//!
//! A layered 2D scene engine: drawable objects live in ordered layers, touch
//! input is routed to the objects under the finger, and a director drives
//! the per-frame update and draw cycle against a host supplied surface.
//!
//! ## Features
//!
//! - **Layered Scenes**: fixed-capacity layers drawn back to front, with move and switch
//! - **Touch Routing**: scene-level and per-object handlers, scaled to game units
//! - **Entities**: integer and float position, size, velocity and acceleration
//! - **Texture Staging**: up to 32 textures per scene, uploaded once per activation
//! - **Headless Rendering**: a recording surface for tests and tooling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_engine::prelude::*;
//!
//! struct Game;
//!
//! impl SceneHandler for Game {
//!     fn on_object_touch_down(&mut self, scene: &mut Scene, target: ObjectRef, _event: &TouchEvent) {
//!         let _ = scene.remove(target);
//!     }
//! }
//!
//! fn main() -> Result<(), SceneError> {
//!     let mut scene = Scene::with_layers(2);
//!     scene.add_to_layer(1, Sprite::new(10.0, 10.0, 32.0, 32.0).touchable())?;
//!
//!     let mut director = SceneDirector::new(DeviceMetrics::identity(480.0, 320.0));
//!     director.set_scene(scene, Box::new(Game));
//!
//!     let mut surface = RecordingSurface::new();
//!     director.handle_touch(&mut TouchEvent::down(20.0, 20.0));
//!     director.on_frame(&mut surface);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod debug;
pub mod entity;
pub mod render;
pub mod input;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{Config, DeviceMetrics, EngineConfig, SceneConfig},
        entity::Entity,
        foundation::math::{Mat4, Rect, Vec2},
        input::{TouchEvent, TouchPhase},
        render::{DrawableObject, RecordingSurface, RenderSurface, Sprite, Texture, Window},
        scene::{Layer, ObjectRef, Scene, SceneDirector, SceneError, SceneHandler},
    };
}

//! Scene management system
//!
//! A [`Scene`] is a stack of [`Layer`]s holding drawable objects, plus the
//! textures it needs uploaded and an optional scrolling [`Window`](crate::render::Window).
//! Game behavior lives in a [`SceneHandler`]; the [`SceneDirector`] pairs
//! the two and drives them from host callbacks.
//!
//! ## Architecture
//!
//! ```text
//! Host (frame callback, touch input)
//!      ↓
//! SceneDirector (activation, texture upload, frame order)
//!      ↓
//! Scene + SceneHandler (layers, touch routing, hooks)
//!      ↓
//! RenderSurface (host drawing API)
//! ```

mod composition;
mod director;
mod error;
mod handler;
mod layer;
mod lifecycle;
mod texture_slots;
mod touch_routing;

#[cfg(test)]
mod tests;

pub use composition::Scene;
pub use director::{ActiveScene, SceneDirector};
pub use error::{SceneError, SceneResult};
pub use handler::{ObjectRef, SceneHandler};
pub use layer::Layer;
pub use texture_slots::{TextureSlots, SCENE_TEXTURE_COUNT};

//! # Rendering Collaborators
//!
//! The engine draws through a host supplied surface rather than owning a
//! graphics API. This module defines that boundary and the leaf types the
//! scene hands to it.
//!
//! ## Architecture
//!
//! - **Surface**: [`RenderSurface`], the primitives a host implements
//! - **Textures**: shared [`Texture`] handles uploaded once per scene activation
//! - **Drawables**: the [`DrawableObject`] capability set plus a concrete [`Sprite`]
//! - **Window**: optional scrolling viewport for a scene
//! - **Recording**: [`RecordingSurface`] for headless runs and tests

pub mod surface;
pub mod texture;
pub mod drawable;
pub mod viewport;
pub mod recording;

pub use surface::{MatrixMode, RenderError, RenderResult, RenderSurface};
pub use texture::{Texture, TextureId};
pub use drawable::{DrawableObject, Sprite};
pub use viewport::Window;
pub use recording::{DrawCommand, RecordingSurface};

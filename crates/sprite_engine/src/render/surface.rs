//! Rendering surface abstraction
//!
//! The engine does not own a graphics API. Hosts implement [`RenderSurface`]
//! on top of whatever fixed-function style API they have (OpenGL ES on a
//! phone, a software rasterizer, or [`RecordingSurface`](super::RecordingSurface)
//! in tests). Calls happen on the thread that owns the graphics context.

use thiserror::Error;

use crate::foundation::math::{Mat4, Rect};
use crate::render::texture::{Texture, TextureId};

/// Result type for surface operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Matrix stack selected by [`RenderSurface::set_matrix_mode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixMode {
    /// Model-view transform
    ModelView,
    /// Projection transform
    Projection,
}

/// Errors reported by a rendering surface
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Texture upload failed
    #[error("Failed to upload texture '{name}': {reason}")]
    TextureUpload {
        /// Texture name
        name: String,
        /// Backend supplied reason
        reason: String,
    },

    /// Any other backend failure
    #[error("Render backend error: {0}")]
    Backend(String),
}

/// Drawing primitives consumed by scenes, layers and drawables
pub trait RenderSurface {
    /// Clear the color buffer
    fn clear_color_buffer(&mut self);

    /// Select the matrix stack subsequent matrix calls apply to
    fn set_matrix_mode(&mut self, mode: MatrixMode);

    /// Replace the current matrix with identity
    fn load_identity(&mut self);

    /// Multiply the current matrix by `matrix`
    fn mult_matrix(&mut self, matrix: &Mat4);

    /// Upload texture data and return the backend id for it
    fn upload_texture(&mut self, texture: &Texture) -> RenderResult<TextureId>;

    /// Draw an axis-aligned quad, optionally textured
    fn draw_quad(&mut self, rect: Rect, texture: Option<TextureId>);
}

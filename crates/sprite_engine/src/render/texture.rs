//! Texture handles
//!
//! A [`Texture`] is a shared handle: the scene's pending slots and the
//! sprites that draw with it hold clones of the same texture, and uploading
//! through any clone makes the backend id visible to all of them.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::render::surface::{RenderResult, RenderSurface};

/// Backend id of an uploaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct TextureInner {
    name: String,
    width: u32,
    height: u32,
    id: Cell<Option<TextureId>>,
}

/// Shared texture handle
#[derive(Debug, Clone)]
pub struct Texture {
    inner: Rc<TextureInner>,
}

impl Texture {
    /// Create a texture that has not been uploaded yet
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            inner: Rc::new(TextureInner {
                name: name.into(),
                width,
                height,
                id: Cell::new(None),
            }),
        }
    }

    /// Texture name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Backend id, once uploaded
    pub fn id(&self) -> Option<TextureId> {
        self.inner.id.get()
    }

    /// Whether the texture has been uploaded
    pub fn is_loaded(&self) -> bool {
        self.id().is_some()
    }

    /// Upload onto `surface`, replacing any previous id
    pub fn load(&self, surface: &mut dyn RenderSurface) -> RenderResult<TextureId> {
        let id = surface.upload_texture(self)?;
        log::debug!("Uploaded texture '{}' ({}x{}) as {}", self.name(), self.width(), self.height(), id);
        self.inner.id.set(Some(id));
        Ok(id)
    }
}

//! Recording surface
//!
//! A [`RenderSurface`] that draws nothing and keeps every call as a
//! [`DrawCommand`]. Used for headless runs and for checking draw order.

use std::collections::HashSet;

use crate::foundation::math::{Mat4, Rect};
use crate::render::surface::{MatrixMode, RenderError, RenderResult, RenderSurface};
use crate::render::texture::{Texture, TextureId};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Color buffer cleared
    ClearColorBuffer,
    /// Matrix stack selected
    SetMatrixMode(MatrixMode),
    /// Current matrix reset to identity
    LoadIdentity,
    /// Current matrix multiplied
    MultMatrix(Mat4),
    /// Texture uploaded
    UploadTexture {
        /// Texture name
        name: String,
        /// Id handed back to the texture
        id: TextureId,
    },
    /// Quad drawn
    DrawQuad {
        /// Quad bounds
        rect: Rect,
        /// Bound texture, if any
        texture: Option<TextureId>,
    },
}

/// Surface that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    next_texture_id: u32,
    failing_textures: HashSet<String>,
}

impl RecordingSurface {
    /// Create an empty recording surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Make uploads of the named texture fail
    pub fn fail_uploads_for(&mut self, name: impl Into<String>) {
        self.failing_textures.insert(name.into());
    }

    /// Every recorded call, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded calls, leaving the recording empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of successful texture uploads recorded
    pub fn upload_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::UploadTexture { .. }))
            .count()
    }

    /// Bounds of every quad drawn, in draw order
    pub fn drawn_quads(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawQuad { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_color_buffer(&mut self) {
        self.commands.push(DrawCommand::ClearColorBuffer);
    }

    fn set_matrix_mode(&mut self, mode: MatrixMode) {
        self.commands.push(DrawCommand::SetMatrixMode(mode));
    }

    fn load_identity(&mut self) {
        self.commands.push(DrawCommand::LoadIdentity);
    }

    fn mult_matrix(&mut self, matrix: &Mat4) {
        self.commands.push(DrawCommand::MultMatrix(*matrix));
    }

    fn upload_texture(&mut self, texture: &Texture) -> RenderResult<TextureId> {
        if self.failing_textures.contains(texture.name()) {
            return Err(RenderError::TextureUpload {
                name: texture.name().to_string(),
                reason: "upload rejected by recording surface".to_string(),
            });
        }
        self.next_texture_id += 1;
        let id = TextureId(self.next_texture_id);
        self.commands.push(DrawCommand::UploadTexture {
            name: texture.name().to_string(),
            id,
        });
        Ok(id)
    }

    fn draw_quad(&mut self, rect: Rect, texture: Option<TextureId>) {
        self.commands.push(DrawCommand::DrawQuad { rect, texture });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_ids_are_sequential() {
        let mut surface = RecordingSurface::new();
        let a = surface.upload_texture(&Texture::new("a", 1, 1)).unwrap();
        let b = surface.upload_texture(&Texture::new("b", 1, 1)).unwrap();

        assert_eq!(a, TextureId(1));
        assert_eq!(b, TextureId(2));
        assert_eq!(surface.upload_count(), 2);
    }

    #[test]
    fn test_take_commands_empties_recording() {
        let mut surface = RecordingSurface::new();
        surface.clear_color_buffer();
        surface.draw_quad(Rect::new(0.0, 0.0, 1.0, 1.0), None);

        let commands = surface.take_commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], DrawCommand::ClearColorBuffer);
        assert!(surface.commands().is_empty());
    }
}

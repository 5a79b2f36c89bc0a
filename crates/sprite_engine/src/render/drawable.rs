//! Drawable objects
//!
//! [`DrawableObject`] is the capability set layers and scenes work with:
//! liveness, touchability, bounds, and the per-frame `on_draw`/`on_update`
//! hooks. Every drawable is backed by an [`Entity`]; the hooks default to
//! doing nothing so each kind overrides only what it needs.

use crate::entity::Entity;
use crate::foundation::any::AsAny;
use crate::foundation::math::Rect;
use crate::render::surface::RenderSurface;
use crate::render::texture::Texture;

/// Object that can live in a layer
pub trait DrawableObject: AsAny {
    /// Backing entity
    fn entity(&self) -> &Entity;

    /// Mutable backing entity
    fn entity_mut(&mut self) -> &mut Entity;

    /// Whether the object is dead and should be skipped
    fn is_dead(&self) -> bool {
        self.entity().is_dead()
    }

    /// Whether touch routing considers this object
    fn is_touchable(&self) -> bool {
        false
    }

    /// Hit-test and draw bounds
    fn bounds(&self) -> Rect {
        self.entity().bounds()
    }

    /// Issue draw calls for this frame
    fn on_draw(&mut self, _surface: &mut dyn RenderSurface) {}

    /// Per-frame update step
    fn on_update(&mut self) {}
}

impl<'a> dyn DrawableObject + 'a {
    /// Downcast to a concrete drawable type
    pub fn downcast_ref<T: DrawableObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably downcast to a concrete drawable type
    pub fn downcast_mut<T: DrawableObject>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl DrawableObject for Entity {
    fn entity(&self) -> &Entity {
        self
    }

    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}

/// Textured (or flat) rectangle
///
/// The simplest concrete drawable: one quad at the entity's float bounds.
#[derive(Debug, Clone)]
pub struct Sprite {
    entity: Entity,
    touchable: bool,
    texture: Option<Texture>,
}

impl Sprite {
    /// Create a live, untextured sprite
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut entity = Entity::new();
        entity.set_posf(x, y);
        entity.set_sizef(width, height);
        entity.make_alive();
        Self {
            entity,
            touchable: false,
            texture: None,
        }
    }

    /// Set the texture drawn on the quad
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Make the sprite receive touches
    pub fn touchable(mut self) -> Self {
        self.touchable = true;
        self
    }

    /// Enable or disable touch routing for this sprite
    pub fn set_touchable(&mut self, touchable: bool) {
        self.touchable = touchable;
    }

    /// Texture drawn on the quad
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }
}

impl DrawableObject for Sprite {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn is_touchable(&self) -> bool {
        self.touchable
    }

    fn on_draw(&mut self, surface: &mut dyn RenderSurface) {
        let texture = self.texture.as_ref().and_then(Texture::id);
        surface.draw_quad(self.entity.bounds(), texture);
        self.entity.take_position_update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawCommand, RecordingSurface};

    #[test]
    fn test_entity_is_an_inert_drawable() {
        let mut entity = Entity::new();
        let mut surface = RecordingSurface::new();

        entity.on_draw(&mut surface);
        assert!(surface.commands().is_empty());
        assert!(!entity.is_touchable());
        assert!(DrawableObject::is_dead(&entity));
    }

    #[test]
    fn test_sprite_draws_its_bounds() {
        let texture = Texture::new("coin", 8, 8);
        let mut surface = RecordingSurface::new();
        texture.load(&mut surface).unwrap();
        surface.take_commands();

        let mut sprite = Sprite::new(1.0, 2.0, 8.0, 8.0).with_texture(texture.clone());
        assert!(sprite.entity().requires_position_update());
        sprite.on_draw(&mut surface);

        assert_eq!(
            surface.commands(),
            &[DrawCommand::DrawQuad {
                rect: Rect::new(1.0, 2.0, 8.0, 8.0),
                texture: texture.id(),
            }]
        );
        assert!(!sprite.entity().requires_position_update());
    }

    #[test]
    fn test_downcast_through_trait_object() {
        let boxed: Box<dyn DrawableObject> = Box::new(Sprite::new(0.0, 0.0, 1.0, 1.0).touchable());
        let object: &dyn DrawableObject = &*boxed;

        assert!(object.downcast_ref::<Sprite>().is_some());
        assert!(object.downcast_ref::<Entity>().is_none());
        assert!(object.is_touchable());
    }
}

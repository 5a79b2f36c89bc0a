//! Director-driven frames with a small game on top

use crate::entity::Entity;
use crate::foundation::math::Rect;
use crate::input::TouchEvent;
use crate::render::{DrawableObject, RecordingSurface, RenderSurface, Sprite, Texture, Window};
use crate::scene::{ObjectRef, Scene, SceneDirector, SceneHandler};

/// Drifts by its velocity every update
struct Drifter {
    entity: Entity,
}

impl Drifter {
    fn new(x: f32, y: f32, vel_x: f32) -> Self {
        let mut entity = Entity::new();
        entity.set_posf(x, y);
        entity.set_sizef(2.0, 2.0);
        entity.set_velf(vel_x, 0.0);
        entity.make_alive();
        Self { entity }
    }
}

impl DrawableObject for Drifter {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn is_touchable(&self) -> bool {
        true
    }

    fn on_draw(&mut self, surface: &mut dyn RenderSurface) {
        surface.draw_quad(self.bounds(), None);
    }

    fn on_update(&mut self) {
        let x = self.entity.xf() + self.entity.vel_xf();
        self.entity.set_xf(x);
    }
}

/// Spawns a sprite where a touch lifts over empty space, kills what is pressed
#[derive(Default)]
struct Gardener {
    spawned: u32,
    killed: u32,
}

impl SceneHandler for Gardener {
    fn on_touch_up(&mut self, scene: &mut Scene, event: &TouchEvent) {
        if scene.touch_targets(event.x(), event.y()).is_empty()
            && scene.add_to_layer(1, Sprite::new(event.x(), event.y(), 4.0, 4.0).touchable()).is_ok()
        {
            self.spawned += 1;
        }
    }

    fn on_object_touch_down(&mut self, scene: &mut Scene, target: ObjectRef, _event: &TouchEvent) {
        if scene.remove(target).is_ok() {
            self.killed += 1;
        }
    }
}

fn gardener(director: &SceneDirector) -> &Gardener {
    director.handler().and_then(|h| h.downcast_ref::<Gardener>()).unwrap()
}

#[test]
fn test_objects_update_before_draw() {
    let mut director = SceneDirector::default();
    let mut scene = Scene::new();
    scene.add(Drifter::new(0.0, 0.0, 3.0)).unwrap();
    director.set_scene(scene, Box::new(()));

    let mut surface = RecordingSurface::new();
    director.on_frame(&mut surface);
    director.on_frame(&mut surface);

    assert_eq!(
        surface.drawn_quads(),
        vec![Rect::new(3.0, 0.0, 2.0, 2.0), Rect::new(6.0, 0.0, 2.0, 2.0)]
    );
}

#[test]
fn test_touch_spawns_then_kills() {
    let mut director = SceneDirector::default();
    director.set_scene(Scene::with_uniform_capacity(2, 1), Box::<Gardener>::default());
    let mut surface = RecordingSurface::new();

    director.handle_touch(&mut TouchEvent::up(50.0, 50.0));
    director.on_frame(&mut surface);
    assert_eq!(surface.drawn_quads().len(), 1);
    assert_eq!(gardener(&director).killed, 0);

    director.handle_touch(&mut TouchEvent::down(51.0, 51.0));
    surface.take_commands();
    director.on_frame(&mut surface);

    assert_eq!(gardener(&director).spawned, 1);
    assert_eq!(gardener(&director).killed, 1);
    assert!(surface.drawn_quads().is_empty());

    // The dead slot is reclaimed by the next spawn
    director.handle_touch(&mut TouchEvent::up(80.0, 80.0));
    let layer = &director.scene().unwrap().layers()[1];
    assert_eq!(layer.len(), 1);
    assert_eq!(gardener(&director).spawned, 2);
}

#[test]
fn test_window_scroll_between_frames() {
    let mut director = SceneDirector::default();
    let mut scene = Scene::new();
    let texture = Texture::new("background", 64, 64);
    scene.use_texture(texture.clone()).unwrap();
    scene.add(Sprite::new(0.0, 0.0, 64.0, 64.0).with_texture(texture.clone())).unwrap();
    scene.set_window(Window::new(0.0, 0.0, 480.0, 320.0));
    director.set_scene(scene, Box::new(()));

    let mut surface = RecordingSurface::new();
    director.on_frame(&mut surface);
    assert!(texture.is_loaded());

    director.scene_mut().and_then(Scene::window_mut).unwrap().move_to(16.0, 0.0);
    surface.take_commands();
    director.on_frame(&mut surface);

    let expected = Window::new(16.0, 0.0, 480.0, 320.0).view_matrix();
    assert!(surface
        .commands()
        .iter()
        .any(|c| *c == crate::render::DrawCommand::MultMatrix(expected)));
    assert_eq!(surface.upload_count(), 0);
}

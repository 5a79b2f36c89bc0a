//! Touch routing
//!
//! A touch is delivered to the scene's handler first, then broadcast to
//! every live, touchable object under the point. No handler consumes the
//! event; every hit object is told about it.

use log::trace;

use crate::core::config::DeviceMetrics;
use crate::input::collision::touches_object;
use crate::input::{TouchEvent, TouchPhase};
use crate::scene::handler::{ObjectRef, SceneHandler};
use crate::scene::Scene;

impl Scene {
    /// Objects that would receive a touch at `(x, y)`, in layer then slot order
    pub fn touch_targets(&self, x: f32, y: f32) -> Vec<ObjectRef> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(layer_index, layer)| {
                layer
                    .iter()
                    .filter(move |(_, object)| touches_object(*object, x, y))
                    .map(move |(slot, _)| ObjectRef::new(layer_index, slot))
            })
            .collect()
    }

    /// Route a touch event through `handler`
    ///
    /// The event location is rewritten into game units before dispatch, so
    /// the caller sees the scaled coordinates afterwards. Object hits are
    /// resolved before any object handler runs; handlers may change the
    /// scene without affecting who receives this event.
    pub fn handle_touch(&mut self, handler: &mut dyn SceneHandler, event: &mut TouchEvent, metrics: &DeviceMetrics) {
        event.apply_metrics(metrics);
        let event = *event;
        trace!("Touch {:?} at ({}, {})", event.phase(), event.x(), event.y());

        handler.on_touch(self, &event);
        match event.phase() {
            TouchPhase::Down => handler.on_touch_down(self, &event),
            TouchPhase::Up => handler.on_touch_up(self, &event),
            TouchPhase::Move => handler.on_touch_move(self, &event),
            TouchPhase::Cancel | TouchPhase::Other(_) => {}
        }

        for target in self.touch_targets(event.x(), event.y()) {
            handler.on_object_touch(self, target, &event);
            match event.phase() {
                TouchPhase::Down => handler.on_object_touch_down(self, target, &event),
                TouchPhase::Up => handler.on_object_touch_up(self, target, &event),
                TouchPhase::Move => handler.on_object_touch_move(self, target, &event),
                TouchPhase::Cancel | TouchPhase::Other(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Sprite;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct Tally {
        touch: u32,
        down: u32,
        up: u32,
        object_touch: Vec<ObjectRef>,
        object_down: Vec<ObjectRef>,
        object_up: Vec<ObjectRef>,
        last: Option<(f32, f32)>,
    }

    impl SceneHandler for Tally {
        fn on_touch(&mut self, _scene: &mut Scene, event: &TouchEvent) {
            self.touch += 1;
            self.last = Some((event.x(), event.y()));
        }

        fn on_touch_down(&mut self, _scene: &mut Scene, _event: &TouchEvent) {
            self.down += 1;
        }

        fn on_touch_up(&mut self, _scene: &mut Scene, _event: &TouchEvent) {
            self.up += 1;
        }

        fn on_object_touch(&mut self, _scene: &mut Scene, target: ObjectRef, _event: &TouchEvent) {
            self.object_touch.push(target);
        }

        fn on_object_touch_down(&mut self, _scene: &mut Scene, target: ObjectRef, _event: &TouchEvent) {
            self.object_down.push(target);
        }

        fn on_object_touch_up(&mut self, _scene: &mut Scene, target: ObjectRef, _event: &TouchEvent) {
            self.object_up.push(target);
        }
    }

    fn identity() -> DeviceMetrics {
        DeviceMetrics::identity(480.0, 320.0)
    }

    /// One touchable square at the origin on layer 0
    fn single_target_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Sprite::new(0.0, 0.0, 10.0, 10.0).touchable()).unwrap();
        scene
    }

    #[test]
    fn test_touch_down_inside_object() {
        let mut scene = single_target_scene();
        let mut handler = Tally::default();

        scene.handle_touch(&mut handler, &mut TouchEvent::down(5.0, 5.0), &identity());

        assert_eq!(handler.touch, 1);
        assert_eq!(handler.down, 1);
        assert_eq!(handler.up, 0);
        assert_eq!(handler.object_touch, vec![ObjectRef::new(0, 0)]);
        assert_eq!(handler.object_down, vec![ObjectRef::new(0, 0)]);
        assert!(handler.object_up.is_empty());
    }

    #[test]
    fn test_touch_up_outside_object() {
        let mut scene = single_target_scene();
        let mut handler = Tally::default();

        scene.handle_touch(&mut handler, &mut TouchEvent::up(50.0, 50.0), &identity());

        assert_eq!(handler.touch, 1);
        assert_eq!(handler.up, 1);
        assert!(handler.object_touch.is_empty());
    }

    #[test]
    fn test_right_and_bottom_edges_miss() {
        let mut scene = single_target_scene();
        let mut handler = Tally::default();

        scene.handle_touch(&mut handler, &mut TouchEvent::down(10.0, 5.0), &identity());
        scene.handle_touch(&mut handler, &mut TouchEvent::down(5.0, 10.0), &identity());
        scene.handle_touch(&mut handler, &mut TouchEvent::down(0.0, 0.0), &identity());

        assert_eq!(handler.object_down, vec![ObjectRef::new(0, 0)]);
    }

    #[test]
    fn test_move_calls_on_touch_twice_by_default() {
        let mut scene = single_target_scene();
        let mut handler = Tally::default();

        scene.handle_touch(&mut handler, &mut TouchEvent::moved(5.0, 5.0), &identity());

        assert_eq!(handler.touch, 2);
        assert_eq!(handler.down + handler.up, 0);
        // Object move forwards to on_object_touch as well
        assert_eq!(handler.object_touch.len(), 2);
    }

    #[test]
    fn test_other_phases_only_reach_on_touch() {
        let mut scene = single_target_scene();
        let mut handler = Tally::default();

        let mut cancel = TouchEvent::new(TouchPhase::Cancel, 5.0, 5.0);
        scene.handle_touch(&mut handler, &mut cancel, &identity());
        let mut other = TouchEvent::new(TouchPhase::Other(7), 5.0, 5.0);
        scene.handle_touch(&mut handler, &mut other, &identity());

        assert_eq!(handler.touch, 2);
        assert_eq!(handler.down + handler.up, 0);
        assert_eq!(handler.object_touch.len(), 2);
        assert!(handler.object_down.is_empty() && handler.object_up.is_empty());
    }

    #[test]
    fn test_dead_and_untouchable_objects_are_skipped() {
        let mut scene = Scene::with_layers(2);
        let dead = scene.add(Sprite::new(0.0, 0.0, 10.0, 10.0).touchable()).unwrap();
        scene.add(Sprite::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        scene.add_to_layer(1, Sprite::new(0.0, 0.0, 10.0, 10.0).touchable()).unwrap();
        scene.remove(dead).unwrap();

        let mut handler = Tally::default();
        scene.handle_touch(&mut handler, &mut TouchEvent::down(1.0, 1.0), &identity());

        assert_eq!(handler.object_down, vec![ObjectRef::new(1, 0)]);
    }

    #[test]
    fn test_overlapping_objects_all_receive_the_touch() {
        let mut scene = Scene::with_layers(2);
        scene.add(Sprite::new(0.0, 0.0, 10.0, 10.0).touchable()).unwrap();
        scene.add(Sprite::new(2.0, 2.0, 10.0, 10.0).touchable()).unwrap();
        scene.add_to_layer(1, Sprite::new(4.0, 4.0, 10.0, 10.0).touchable()).unwrap();

        assert_eq!(
            scene.touch_targets(5.0, 5.0),
            vec![ObjectRef::new(0, 0), ObjectRef::new(0, 1), ObjectRef::new(1, 0)]
        );
    }

    #[test]
    fn test_location_is_scaled_by_metrics() {
        let mut scene = single_target_scene();
        let mut handler = Tally::default();
        let metrics = DeviceMetrics::new(960.0, 640.0, 480.0, 320.0);

        let mut event = TouchEvent::down(3.0, 4.0);
        scene.handle_touch(&mut handler, &mut event, &metrics);

        assert_relative_eq!(event.x(), 6.0);
        assert_relative_eq!(event.y(), 8.0);
        assert_eq!(handler.last, Some((6.0, 8.0)));
        assert_eq!(handler.object_down, vec![ObjectRef::new(0, 0)]);
    }

    struct Remover;

    impl SceneHandler for Remover {
        fn on_object_touch_down(&mut self, scene: &mut Scene, target: ObjectRef, _event: &TouchEvent) {
            scene.remove(target).unwrap();
        }
    }

    #[test]
    fn test_handlers_may_mutate_the_scene() {
        let mut scene = Scene::new();
        let a = scene.add(Sprite::new(0.0, 0.0, 10.0, 10.0).touchable()).unwrap();
        let b = scene.add(Sprite::new(0.0, 0.0, 10.0, 10.0).touchable()).unwrap();

        scene.handle_touch(&mut Remover, &mut TouchEvent::down(1.0, 1.0), &identity());

        assert!(scene.object(a).unwrap().is_dead());
        assert!(scene.object(b).unwrap().is_dead());
        assert!(scene.touch_targets(1.0, 1.0).is_empty());
    }
}

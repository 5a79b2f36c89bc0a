//! Scene behavior hooks
//!
//! A [`Scene`] holds state; game code supplies behavior by implementing
//! [`SceneHandler`]. Every hook defaults to doing nothing, so a handler only
//! overrides what it cares about. Hooks get mutable access to the scene.

use crate::foundation::any::AsAny;
use crate::input::TouchEvent;
use crate::scene::Scene;

/// Location of an object inside a scene
///
/// Refers to a slot, not to an object identity: moving or switching layers
/// changes which object a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    /// Layer index
    pub layer: usize,
    /// Slot index within the layer
    pub slot: usize,
}

impl ObjectRef {
    /// Create a reference to `slot` in `layer`
    pub const fn new(layer: usize, slot: usize) -> Self {
        Self { layer, slot }
    }
}

/// Per-scene game behavior
pub trait SceneHandler: AsAny {
    /// Per-frame simulation step, before drawing
    fn on_update(&mut self, _scene: &mut Scene) {}

    /// Coarser periodic hook driven by the host
    fn on_game_loop(&mut self, _scene: &mut Scene) {}

    /// The scene became active
    fn on_set_scene(&mut self, _scene: &mut Scene) {}

    /// The scene stopped being active
    fn on_end_scene(&mut self, _scene: &mut Scene) {}

    /// Any touch event, before phase-specific dispatch
    fn on_touch(&mut self, _scene: &mut Scene, _event: &TouchEvent) {}

    /// Touch-down anywhere on the scene
    fn on_touch_down(&mut self, _scene: &mut Scene, _event: &TouchEvent) {}

    /// Touch-up anywhere on the scene
    fn on_touch_up(&mut self, _scene: &mut Scene, _event: &TouchEvent) {}

    /// Move anywhere on the scene
    ///
    /// Forwards to [`SceneHandler::on_touch`] unless overridden, so a handler
    /// that only implements `on_touch` sees moves twice.
    fn on_touch_move(&mut self, scene: &mut Scene, event: &TouchEvent) {
        self.on_touch(scene, event);
    }

    /// Any touch event landing on a touchable object
    fn on_object_touch(&mut self, _scene: &mut Scene, _target: ObjectRef, _event: &TouchEvent) {}

    /// Touch-down on a touchable object
    fn on_object_touch_down(&mut self, _scene: &mut Scene, _target: ObjectRef, _event: &TouchEvent) {}

    /// Touch-up on a touchable object
    fn on_object_touch_up(&mut self, _scene: &mut Scene, _target: ObjectRef, _event: &TouchEvent) {}

    /// Move over a touchable object
    ///
    /// Forwards to [`SceneHandler::on_object_touch`] unless overridden.
    fn on_object_touch_move(&mut self, scene: &mut Scene, target: ObjectRef, event: &TouchEvent) {
        self.on_object_touch(scene, target, event);
    }
}

/// Handler for scenes with no behavior of their own
impl SceneHandler for () {}

impl<'a> dyn SceneHandler + 'a {
    /// Downcast to a concrete handler type
    pub fn downcast_ref<T: SceneHandler>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably downcast to a concrete handler type
    pub fn downcast_mut<T: SceneHandler>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

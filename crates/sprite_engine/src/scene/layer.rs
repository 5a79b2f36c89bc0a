//! Scene layers
//!
//! A [`Layer`] is a fixed-capacity, ordered slot array of drawable objects.
//! Slot order is draw order within the layer.

use std::fmt;

use crate::render::{DrawableObject, RenderSurface};
use crate::scene::error::{SceneError, SceneResult};

type Slot = Option<Box<dyn DrawableObject>>;

/// Fixed-capacity bucket of drawable objects
pub struct Layer {
    slots: Vec<Slot>,
}

impl Layer {
    /// Create an empty layer with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of populated slots, dead occupants included
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no slot is populated
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Add an object to the layer
    ///
    /// Takes the first empty slot; when there is none, the first slot held
    /// by a dead object is reclaimed.
    ///
    /// # Returns
    /// The slot index the object landed in
    pub fn add<T: DrawableObject>(&mut self, object: T) -> SceneResult<usize> {
        self.add_boxed(Box::new(object))
    }

    /// Add an already boxed object to the layer
    pub fn add_boxed(&mut self, object: Box<dyn DrawableObject>) -> SceneResult<usize> {
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .or_else(|| {
                self.slots
                    .iter()
                    .position(|slot| slot.as_ref().is_some_and(|o| o.is_dead()))
            })
            .ok_or(SceneError::LayerFull { capacity: self.capacity() })?;

        self.slots[slot] = Some(object);
        Ok(slot)
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Object in a slot
    pub fn get(&self, slot: usize) -> Option<&dyn DrawableObject> {
        self.slots.get(slot)?.as_deref()
    }

    /// Mutable object in a slot
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut dyn DrawableObject> {
        match self.slots.get_mut(slot) {
            Some(Some(boxed)) => {
                let object: &mut dyn DrawableObject = boxed.as_mut();
                Some(object)
            }
            _ => None,
        }
    }

    /// Populated slots in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &dyn DrawableObject)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_deref().map(|object| (index, object)))
    }

    /// Drop every dead object, returning how many were dropped
    pub fn remove_dead(&mut self) -> usize {
        let mut removed = 0;
        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(|o| o.is_dead()) {
                *slot = None;
                removed += 1;
            }
        }
        removed
    }

    /// Draw every live object in slot order
    pub fn draw(&mut self, surface: &mut dyn RenderSurface) {
        for object in self.slots.iter_mut().flatten() {
            if !object.is_dead() {
                object.on_draw(surface);
            }
        }
    }

    /// Update every live object in slot order
    pub fn update(&mut self) {
        for object in self.slots.iter_mut().flatten() {
            if !object.is_dead() {
                object.on_update();
            }
        }
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_LAYER_OBJECT_COUNT)
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}

//! Downcasting support for trait objects

use std::any::Any;

/// Borrow a trait object as `Any`
///
/// Blanket-implemented for every `'static` type, so traits that list it as a
/// supertrait get downcasting for free.
pub trait AsAny: Any {
    /// Borrow as `Any`
    fn as_any(&self) -> &dyn Any;
    /// Mutably borrow as `Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

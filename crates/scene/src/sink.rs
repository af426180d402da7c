use crate::components::Drawable;
use crate::entity::EntityId;

/// Minimal capability the overlay layers need from a scene graph.
pub trait SceneSink {
    fn add(&mut self, drawable: Drawable) -> EntityId;

    /// Returns `false` if `entity` was not attached.
    fn remove(&mut self, entity: EntityId) -> bool;
}

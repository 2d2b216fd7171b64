//! Entity trait - common interface for all stored entity types

use crate::core::identity::{EntityId, EntityKind};

/// Common trait for all inventory entities
///
/// An entity starts out without an id; the repository assigns one the first
/// time it is saved and it never changes afterwards.
pub trait Entity: Clone {
    /// The kind of entity, used in lookups and messages
    const KIND: EntityKind;

    /// Get the entity's id, if it has been stored
    fn id(&self) -> Option<EntityId>;

    /// Set the entity's id
    fn set_id(&mut self, id: EntityId);
}

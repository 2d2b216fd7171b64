//! In-memory entity repository
//!
//! Each repository owns its entities keyed by id and hands out sequential ids
//! starting at 0. Saving keeps an insertion log, so an entity saved twice is
//! listed twice; both entries resolve to the same stored value.

use std::collections::HashMap;

use crate::core::entity::Entity;
use crate::core::error::{InventoryError, Result};
use crate::core::identity::EntityId;

/// An in-memory store of entities of a single type
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Entity> {
    /// Stored entities by id
    entities: HashMap<EntityId, T>,
    /// Ids in the order they were saved, repeats included
    order: Vec<EntityId>,
    /// Next id to hand out, None once `u64::MAX` has been used
    next_id: Option<EntityId>,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
            order: Vec::new(),
            next_id: Some(EntityId::new(0)),
        }
    }

    fn ensure_id(&mut self, entity: &mut T) -> Result<EntityId> {
        match entity.id() {
            Some(id) => {
                if self.next_id.is_some_and(|next| id >= next) {
                    self.next_id = id.next();
                }
                Ok(id)
            }
            None => {
                let id = self
                    .next_id
                    .ok_or(InventoryError::IdsExhausted { kind: T::KIND })?;
                self.next_id = id.next();
                entity.set_id(id);
                Ok(id)
            }
        }
    }

    /// Store an entity, assigning it an id if it has none
    ///
    /// The assigned id is written back to `entity`. Saving an entity that
    /// already has an id replaces the stored value and appends another entry
    /// to the listing. Fails only when an id-less entity arrives after
    /// `u64::MAX` has been used.
    pub fn save(&mut self, entity: &mut T) -> Result<EntityId> {
        let id = self.ensure_id(entity)?;
        self.entities.insert(id, entity.clone());
        self.order.push(id);
        tracing::trace!(kind = %T::KIND, %id, entries = self.order.len(), "saved entity");
        Ok(id)
    }

    /// All saved entities in insertion order, including repeats
    pub fn find_all(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Find an entity by id
    pub fn find_one(&self, id: EntityId) -> Option<&T> {
        self.entities.get(&id)
    }

    /// Find an entity by id for modification
    pub fn find_one_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.entities.get_mut(&id)
    }

    /// Like [`find_one`](Self::find_one) but reports a missing id as an error
    pub fn get(&self, id: EntityId) -> Result<&T> {
        self.find_one(id)
            .ok_or_else(|| InventoryError::not_found(T::KIND, id))
    }

    /// Like [`find_one_mut`](Self::find_one_mut) but reports a missing id as an error
    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut T> {
        self.find_one_mut(id)
            .ok_or_else(|| InventoryError::not_found(T::KIND, id))
    }

    /// Number of listing entries, repeats included
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing has been saved
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

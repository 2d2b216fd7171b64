//! Supplier entity type - A source able to fulfill part specifications

use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityKind};

/// A supplier, currently identified by its id alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Supplier {
    /// Repository-assigned id, unset until first saved
    pub id: Option<EntityId>,
}

impl Entity for Supplier {
    const KIND: EntityKind = EntityKind::Supplier;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Supplier {
    /// Create an unsaved supplier
    pub fn new() -> Self {
        Self::default()
    }
}

//! Part specification entity - A described purchasable or manufacturable component

use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityKind};

/// A formal description of a component that can be purchased or manufactured
///
/// Tracks the suppliers known to supply it and the requisition requests raised
/// against it, both by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartSpecification {
    /// Repository-assigned id, unset until first saved
    pub id: Option<EntityId>,

    /// Short name
    pub name: String,

    /// Longer description
    pub description: String,

    /// Suppliers able to supply this part, in the order they were added
    pub suppliers: Vec<EntityId>,

    /// Requisition requests raised for this part
    pub requisition_requests: Vec<EntityId>,
}

impl Entity for PartSpecification {
    const KIND: EntityKind = EntityKind::PartSpecification;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl PartSpecification {
    /// Create an unsaved part specification
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            suppliers: Vec::new(),
            requisition_requests: Vec::new(),
        }
    }

    /// Add a supplier to the list of suppliers of this part
    ///
    /// Duplicates are kept.
    pub fn add_supplier(&mut self, supplier: EntityId) {
        self.suppliers.push(supplier);
    }

    /// Remove every supplier of this part
    pub fn remove_suppliers(&mut self) {
        self.suppliers.clear();
    }

    /// Attach a requisition request to this part
    pub fn add_requisition_request(&mut self, request: EntityId) {
        self.requisition_requests.push(request);
    }
}

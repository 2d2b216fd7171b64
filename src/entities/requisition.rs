//! Part requisition request entity - An engineer's request for a quantity of a part

use chrono::{DateTime, Local};

use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityKind};

/// A requisition request raised for a part specification
///
/// Created blank, then filled in with the quantity, the requesting engineer,
/// the time the request was entered and the chosen supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartRequisitionRequest {
    /// Repository-assigned id, unset until first saved
    pub id: Option<EntityId>,

    /// Requested quantity
    pub quantity: i64,

    /// Name of the requesting engineer
    pub engineer_name: String,

    /// When the request was entered
    pub request_date: Option<DateTime<Local>>,

    /// Suppliers selected for this request
    pub suppliers: Vec<EntityId>,
}

impl Entity for PartRequisitionRequest {
    const KIND: EntityKind = EntityKind::RequisitionRequest;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl PartRequisitionRequest {
    /// Create an unsaved, blank requisition request
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a supplier selected for this request
    pub fn add_supplier(&mut self, supplier: EntityId) {
        self.suppliers.push(supplier);
    }
}

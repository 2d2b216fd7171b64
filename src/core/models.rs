//! Transfer models handed between the use case and its user interfaces

use chrono::{DateTime, Local};

use crate::core::identity::EntityId;
use crate::entities::{PartRequisitionRequest, PartSpecification, Supplier};

/// The data about a part specification relevant to the use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartSpecificationModel {
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
}

impl PartSpecificationModel {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl From<&PartSpecification> for PartSpecificationModel {
    fn from(ps: &PartSpecification) -> Self {
        Self {
            id: ps.id,
            name: ps.name.clone(),
            description: ps.description.clone(),
        }
    }
}

impl From<&PartSpecificationModel> for PartSpecification {
    fn from(model: &PartSpecificationModel) -> Self {
        PartSpecification::new(model.name.clone(), model.description.clone())
    }
}

/// The data about a supplier relevant to the use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierModel {
    pub id: Option<EntityId>,
}

impl From<&Supplier> for SupplierModel {
    fn from(supplier: &Supplier) -> Self {
        Self { id: supplier.id }
    }
}

/// The data about a requisition request relevant to the use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestModel {
    pub id: Option<EntityId>,
    pub quantity: i64,
    pub engineer_name: String,
    pub request_date: Option<DateTime<Local>>,
    pub suppliers: Vec<EntityId>,
}

impl From<&PartRequisitionRequest> for RequestModel {
    fn from(request: &PartRequisitionRequest) -> Self {
        Self {
            id: request.id,
            quantity: request.quantity,
            engineer_name: request.engineer_name.clone(),
            request_date: request.request_date,
            suppliers: request.suppliers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_specification_to_model() {
        let mut ps = PartSpecification::new("Bolt", "M6");
        ps.id = Some(EntityId::new(2));
        ps.add_supplier(EntityId::new(0));

        let model = PartSpecificationModel::from(&ps);
        assert_eq!(model.id, Some(EntityId::new(2)));
        assert_eq!(model.name, "Bolt");
        assert_eq!(model.description, "M6");
    }

    #[test]
    fn test_model_to_part_specification_drops_id() {
        let mut model = PartSpecificationModel::new("Nut", "M6 nut");
        model.id = Some(EntityId::new(9));

        let ps = PartSpecification::from(&model);
        assert!(ps.id.is_none());
        assert_eq!(ps.name, "Nut");
    }

    #[test]
    fn test_request_to_model() {
        let mut rr = PartRequisitionRequest::new();
        rr.id = Some(EntityId::new(1));
        rr.quantity = 12;
        rr.engineer_name = "Ada".to_string();
        rr.add_supplier(EntityId::new(4));

        let model = RequestModel::from(&rr);
        assert_eq!(model.id, Some(EntityId::new(1)));
        assert_eq!(model.quantity, 12);
        assert_eq!(model.engineer_name, "Ada");
        assert_eq!(model.suppliers, vec![EntityId::new(4)]);
    }
}

//! Create part specification use case
//!
//! Supports listing, creating and editing part specifications, creating
//! suppliers and assigning them to part specifications, and raising
//! requisition requests against part specifications.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::core::error::Result;
use crate::core::identity::EntityId;
use crate::core::models::{PartSpecificationModel, RequestModel, SupplierModel};
use crate::entities::{
    PartRequisitionRequest, PartRequisitionRequestRepository, PartSpecification,
    PartSpecificationRepository, Supplier, SupplierRepository,
};

/// Implementation of the create part specification use case
///
/// Owns the three repositories it coordinates.
#[derive(Debug, Default)]
pub struct CreatePartSpecification {
    part_specifications: PartSpecificationRepository,
    suppliers: SupplierRepository,
    requisition_requests: PartRequisitionRequestRepository,
}

impl CreatePartSpecification {
    pub fn new(
        part_specifications: PartSpecificationRepository,
        suppliers: SupplierRepository,
        requisition_requests: PartRequisitionRequestRepository,
    ) -> Self {
        Self {
            part_specifications,
            suppliers,
            requisition_requests,
        }
    }

    /// The part specification repository
    pub fn part_specification_repository(&self) -> &PartSpecificationRepository {
        &self.part_specifications
    }

    /// The supplier repository
    pub fn supplier_repository(&self) -> &SupplierRepository {
        &self.suppliers
    }

    /// The requisition request repository
    pub fn requisition_request_repository(&self) -> &PartRequisitionRequestRepository {
        &self.requisition_requests
    }

    /// List all part specifications in storage order
    pub fn list_part_specifications(&self) -> Vec<PartSpecificationModel> {
        self.part_specifications
            .find_all()
            .map(PartSpecificationModel::from)
            .collect()
    }

    /// Create a part specification from a model, returning its new id
    pub fn create_part_specification(
        &mut self,
        model: &PartSpecificationModel,
    ) -> Result<EntityId> {
        let mut part_specification = PartSpecification::from(model);
        let id = self.part_specifications.save(&mut part_specification)?;
        info!(%id, name = %model.name, "created part specification");
        Ok(id)
    }

    /// Give a part specification a different name and description
    pub fn edit_part_specification(
        &mut self,
        id: EntityId,
        name: &str,
        description: &str,
    ) -> Result<()> {
        let part_specification = self.part_specifications.get_mut(id)?;
        part_specification.name = name.to_string();
        part_specification.description = description.to_string();
        debug!(%id, name, description, "edited part specification");
        Ok(())
    }

    /// List all suppliers in storage order
    pub fn list_suppliers(&self) -> Vec<SupplierModel> {
        self.suppliers.find_all().map(SupplierModel::from).collect()
    }

    /// Create a supplier, returning its new id
    ///
    /// The model's fields are not copied; the supplier is created blank.
    pub fn create_supplier(&mut self, _model: &SupplierModel) -> Result<EntityId> {
        let id = self.suppliers.save(&mut Supplier::new())?;
        info!(%id, "created supplier");
        Ok(id)
    }

    /// Add a supplier to a part specification's list of suppliers
    pub fn add_supplier_to_part_specification(
        &mut self,
        part_specification_id: EntityId,
        supplier_id: EntityId,
    ) -> Result<()> {
        self.suppliers.get(supplier_id)?;
        self.part_specifications
            .get_mut(part_specification_id)?
            .add_supplier(supplier_id);
        debug!(%part_specification_id, %supplier_id, "assigned supplier");
        Ok(())
    }

    /// Remove every supplier from a part specification
    pub fn remove_all_suppliers(&mut self, part_specification_id: EntityId) -> Result<()> {
        self.part_specifications
            .get_mut(part_specification_id)?
            .remove_suppliers();
        debug!(%part_specification_id, "removed all suppliers");
        Ok(())
    }

    /// List the suppliers assigned to a part specification, repeats included
    pub fn list_suppliers_of_part_specification(
        &self,
        part_specification_id: EntityId,
    ) -> Result<Vec<SupplierModel>> {
        let part_specification = self.part_specifications.get(part_specification_id)?;
        part_specification
            .suppliers
            .iter()
            .map(|id| self.suppliers.get(*id).map(SupplierModel::from))
            .collect()
    }

    /// List every requisition request, whichever part specification it belongs to
    pub fn list_requisition_requests(&self) -> Vec<RequestModel> {
        self.requisition_requests
            .find_all()
            .map(RequestModel::from)
            .collect()
    }

    /// List the requisition requests attached to one part specification
    pub fn list_requisition_requests_of_part_specification(
        &self,
        part_specification_id: EntityId,
    ) -> Result<Vec<RequestModel>> {
        let part_specification = self.part_specifications.get(part_specification_id)?;
        part_specification
            .requisition_requests
            .iter()
            .map(|id| self.requisition_requests.get(*id).map(RequestModel::from))
            .collect()
    }

    /// Create a blank requisition request, returning its new id
    ///
    /// The model's fields are not copied; they are filled in when the request
    /// is added to a part specification.
    pub fn create_requisition_request(&mut self, _model: &RequestModel) -> Result<EntityId> {
        let id = self
            .requisition_requests
            .save(&mut PartRequisitionRequest::new())?;
        info!(%id, "created requisition request");
        Ok(id)
    }

    /// Fill in a requisition request and attach it to a part specification
    ///
    /// The supplier is added to both the request and the part specification.
    /// Nothing is modified unless all three ids resolve.
    pub fn add_requisition_request_to_part_specification(
        &mut self,
        part_specification_id: EntityId,
        requisition_request_id: EntityId,
        quantity: i64,
        engineer_name: &str,
        date: DateTime<Local>,
        supplier_id: EntityId,
    ) -> Result<()> {
        self.part_specifications.get(part_specification_id)?;
        self.requisition_requests.get(requisition_request_id)?;
        self.suppliers.get(supplier_id)?;

        let part_specification = self.part_specifications.get_mut(part_specification_id)?;
        part_specification.add_supplier(supplier_id);
        part_specification.add_requisition_request(requisition_request_id);

        let request = self.requisition_requests.get_mut(requisition_request_id)?;
        request.quantity = quantity;
        request.engineer_name = engineer_name.to_string();
        request.request_date = Some(date);
        request.add_supplier(supplier_id);

        info!(
            %part_specification_id,
            %requisition_request_id,
            quantity,
            engineer_name,
            %supplier_id,
            "added requisition request"
        );
        Ok(())
    }
}

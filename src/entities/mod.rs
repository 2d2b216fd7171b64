//! Entity type definitions
//!
//! - [`PartSpecification`] - Described components with their suppliers and requests
//! - [`Supplier`] - Sources able to fulfill part specifications
//! - [`PartRequisitionRequest`] - Engineer requests for a quantity of a part

pub mod part_specification;
pub mod requisition;
pub mod supplier;

pub use part_specification::PartSpecification;
pub use requisition::PartRequisitionRequest;
pub use supplier::Supplier;

use crate::core::repository::InMemoryRepository;

/// Repository of part specifications
pub type PartSpecificationRepository = InMemoryRepository<PartSpecification>;

/// Repository of suppliers
pub type SupplierRepository = InMemoryRepository<Supplier>;

/// Repository of requisition requests
pub type PartRequisitionRequestRepository = InMemoryRepository<PartRequisitionRequest>;

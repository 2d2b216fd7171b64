//! Core module - fundamental types, storage and the use case

pub mod config;
pub mod entity;
pub mod error;
pub mod identity;
pub mod models;
pub mod repository;
pub mod usecase;

pub use config::Config;
pub use entity::Entity;
pub use error::{InventoryError, Result};
pub use identity::{EntityId, EntityKind, IdParseError};
pub use models::{PartSpecificationModel, RequestModel, SupplierModel};
pub use repository::InMemoryRepository;
pub use usecase::CreatePartSpecification;

//! Error types shared by the repositories, use case and console

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::identity::{EntityId, EntityKind, IdParseError};

/// Errors produced by inventory operations
#[derive(Debug, Error, Diagnostic)]
pub enum InventoryError {
    #[error("{kind} {id} not found")]
    #[diagnostic(
        code(inventory::not_found),
        help("list the existing entries to pick a valid id")
    )]
    NotFound { kind: EntityKind, id: EntityId },

    #[error("invalid input '{input}': {reason}")]
    #[diagnostic(code(inventory::invalid_input))]
    InvalidInput { input: String, reason: String },

    #[error("no {kind} ids left to assign")]
    #[diagnostic(code(inventory::ids_exhausted))]
    IdsExhausted { kind: EntityKind },

    #[error("input ended before a response was entered")]
    #[diagnostic(code(inventory::end_of_input))]
    EndOfInput,

    #[error("failed to read config {}: {message}", .path.display())]
    #[diagnostic(
        code(inventory::config),
        help("fix or remove the file; every key is optional")
    )]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    #[diagnostic(code(inventory::io))]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    /// Build a NotFound error
    pub fn not_found(kind: EntityKind, id: EntityId) -> Self {
        Self::NotFound { kind, id }
    }

    /// Build an InvalidInput error
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Whether the console can report this error and keep running
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidInput { .. } | Self::IdsExhausted { .. }
        )
    }
}

impl IdParseError {
    /// Convert into an InvalidInput error carrying the raw input
    pub fn into_input_error(self, input: &str) -> InventoryError {
        InventoryError::invalid_input(input.trim(), self.to_string())
    }
}

/// Result alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

//! Main menu choices

use std::fmt;

/// A main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuResponse {
    CreatePartSpecification,
    AssignSupplier,
    CreateSupplier,
    EditPartSpecification,
    PartRequisitionRequest,
    ListInventory,
    Quit,
    Invalid,
}

impl MenuResponse {
    /// Selections shown in the main menu, in display order
    pub fn all() -> &'static [MenuResponse] {
        &[
            MenuResponse::CreatePartSpecification,
            MenuResponse::AssignSupplier,
            MenuResponse::CreateSupplier,
            MenuResponse::EditPartSpecification,
            MenuResponse::PartRequisitionRequest,
            MenuResponse::ListInventory,
            MenuResponse::Quit,
        ]
    }

    pub fn input_character(&self) -> char {
        match self {
            MenuResponse::CreatePartSpecification => 'c',
            MenuResponse::AssignSupplier => 'a',
            MenuResponse::CreateSupplier => 's',
            MenuResponse::EditPartSpecification => 'e',
            MenuResponse::PartRequisitionRequest => 'r',
            MenuResponse::ListInventory => 'l',
            MenuResponse::Quit => 'q',
            MenuResponse::Invalid => '?',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuResponse::CreatePartSpecification => "Create part specification",
            MenuResponse::AssignSupplier => "Assign supplier to part specification",
            MenuResponse::CreateSupplier => "Create supplier",
            MenuResponse::EditPartSpecification => "Edit part specification",
            MenuResponse::PartRequisitionRequest => "Create requisition request",
            MenuResponse::ListInventory => "List inventory",
            MenuResponse::Quit => "Quit",
            MenuResponse::Invalid => "INVALID",
        }
    }

    /// Match a line of input on its first non-blank character
    pub fn from_input(line: &str) -> Self {
        line.trim()
            .chars()
            .next()
            .and_then(|c| {
                Self::all()
                    .iter()
                    .copied()
                    .find(|candidate| candidate.input_character() == c)
            })
            .unwrap_or(MenuResponse::Invalid)
    }
}

impl fmt::Display for MenuResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.input_character(), self.description())
    }
}

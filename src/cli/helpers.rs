//! Shared helper functions for the console
//!
//! Parsing of user responses lives here so every prompt treats input the same
//! way.

use crate::core::error::{InventoryError, Result};
use crate::core::identity::EntityId;

/// Parse an entity id typed by the user
pub fn parse_id(input: &str) -> Result<EntityId> {
    EntityId::parse(input).map_err(|e| e.into_input_error(input))
}

/// Parse a quantity typed by the user
///
/// Negative quantities are accepted.
pub fn parse_quantity(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InventoryError::invalid_input(trimmed, "quantity must be a whole number"))
}

/// Whether a yes/no response declines
pub fn is_no(response: &str) -> bool {
    response.trim().eq_ignore_ascii_case("n")
}

/// Use `value`, or `current` when the user just pressed enter
pub fn or_keep(value: String, current: &str) -> String {
    if value.is_empty() {
        current.to_string()
    } else {
        value
    }
}

/// Join ids for display, "-" when there are none
pub fn join_ids(ids: &[EntityId]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

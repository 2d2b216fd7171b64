//! Entity identity system using per-repository sequential ids

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Entity kinds stored by the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Part specification
    PartSpecification,
    /// Supplier
    Supplier,
    /// Part requisition request
    RequisitionRequest,
}

impl EntityKind {
    /// Get the human-readable name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::PartSpecification => "part specification",
            EntityKind::Supplier => "supplier",
            EntityKind::RequisitionRequest => "requisition request",
        }
    }

}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A repository-assigned entity identifier
///
/// Ids are handed out sequentially per repository starting at 0, so the same
/// number can identify a supplier in one repository and a part specification
/// in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// Create an EntityId from its numeric value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the numeric value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one, or None after `u64::MAX`
    pub(crate) fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Parse an EntityId from user input, ignoring surrounding whitespace
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdParseError::Empty);
        }
        if trimmed.starts_with('-') && trimmed[1..].chars().all(|c| c.is_ascii_digit()) {
            return Err(IdParseError::Negative(trimmed.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdParseError::NotANumber(trimmed.to_string()))
    }
}

/// Errors that can occur when parsing entity IDs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("no id entered")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("ids are never negative: '{0}'")]
    Negative(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_parsing() {
        assert_eq!(EntityId::parse("0").unwrap(), EntityId::new(0));
        assert_eq!(EntityId::parse("  42 ").unwrap(), EntityId::new(42));
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId::new(7).to_string(), "7");
    }

    #[test]
    fn test_entity_id_next() {
        assert_eq!(EntityId::new(0).next(), Some(EntityId::new(1)));
    }

    #[test]
    fn test_entity_id_next_at_max() {
        assert_eq!(EntityId::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_entity_id_empty() {
        assert_eq!(EntityId::parse("   ").unwrap_err(), IdParseError::Empty);
    }

    #[test]
    fn test_entity_id_not_a_number() {
        let err = EntityId::parse("abc").unwrap_err();
        assert!(matches!(err, IdParseError::NotANumber(_)));
    }

    #[test]
    fn test_entity_id_negative() {
        let err = EntityId::parse("-3").unwrap_err();
        assert_eq!(err, IdParseError::Negative("-3".to_string()));
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(
            EntityKind::PartSpecification.to_string(),
            "part specification"
        );
        assert_eq!(EntityKind::Supplier.to_string(), "supplier");
        assert_eq!(
            EntityKind::RequisitionRequest.to_string(),
            "requisition request"
        );
    }
}

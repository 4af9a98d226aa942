//! Reference entities
//!
//! Business, Ledger, Head, Mode and Type are simple named records that
//! transactions are tagged with. They share one shape and differ only in
//! the REST resource they live under.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntityId;

/// The five kinds of reference entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Business,
    Ledger,
    Head,
    Mode,
    Type,
}

impl EntityKind {
    /// REST collection name under the API root
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Business => "businesses",
            Self::Ledger => "ledgers",
            Self::Head => "heads",
            Self::Mode => "modes",
            Self::Type => "types",
        }
    }

    /// Singular display name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Ledger => "Ledger",
            Self::Head => "Head",
            Self::Mode => "Mode",
            Self::Type => "Type",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named reference record as the backend returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Body for creating or renaming an entity
#[derive(Debug, Clone, Serialize)]
pub struct EntityPayload {
    pub name: String,
}

impl EntityPayload {
    /// Build a payload, trimming the name and rejecting blanks
    pub fn new(name: &str) -> Result<Self, EntityValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EntityValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    EmptyName,
}

impl fmt::Display for EntityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
        }
    }
}

impl std::error::Error for EntityValidationError {}

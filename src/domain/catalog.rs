// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog Handle
//!
//! A resource points back at its owning catalog through this identifier
//! rather than an owning pointer, so the catalog/resource relation never
//! forms a reference cycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a catalog that owns resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(Uuid);

impl CatalogId {
    /// Generate a fresh, time-ordered catalog id
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CatalogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CatalogId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_distinct() {
        assert_ne!(CatalogId::new(), CatalogId::new());
    }

    #[test]
    fn test_catalog_id_round_trips_uuid() {
        let uuid = Uuid::parse_str("01934f4a-1000-7000-8000-000000001000").unwrap();
        let id = CatalogId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.to_string(), "01934f4a-1000-7000-8000-000000001000");
    }
}

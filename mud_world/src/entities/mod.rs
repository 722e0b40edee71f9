//! Identifiers for the things the world graph refers to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub Uuid);

impl LocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for LocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an entity present at a location.
///
/// A plain integer for now; it will later point at a full player entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OccupantId(pub u64);

impl From<u64> for OccupantId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OccupantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_ids_are_unique() {
        assert_ne!(LocationId::new(), LocationId::new());
        assert_eq!(LocationId::nil(), LocationId::nil());
    }

    #[test]
    fn test_occupant_id_display() {
        assert_eq!(OccupantId::from(42).to_string(), "42");
    }
}

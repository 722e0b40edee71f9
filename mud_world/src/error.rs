//! Error types for world graph operations.

use thiserror::Error;

use crate::entities::{LocationId, OccupantId};

/// Errors raised by location, exit and world operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// An exit shares a name with an exit already attached to the location.
    ///
    /// This means the world data is malformed; callers should not retry.
    #[error("exit name collision\nLocation:\t{location}\nExit:\t\t{exit}\nName:\t\t{name}")]
    DuplicateExitName {
        location: String,
        exit: String,
        name: String,
    },

    /// The occupant is not listed at the location.
    #[error("occupant {occupant} not found at {location}")]
    OccupantNotFound {
        location: String,
        occupant: OccupantId,
    },

    /// A membership query received a value of an unsupported type.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A location with this id is already part of the world.
    #[error("duplicate location: {0}")]
    DuplicateLocation(LocationId),

    #[error("unknown location: {0}")]
    UnknownLocation(LocationId),
}

pub type Result<T, E = WorldError> = std::result::Result<T, E>;

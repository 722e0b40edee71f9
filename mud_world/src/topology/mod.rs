//! Topology module - the location/exit graph.
//!
//! - **Locations**: nodes with a name, description, exits and occupants
//! - **Exits**: named, directed edges pointing at a destination location
//! - **Membership**: the unified "is this here" query over exits, names and occupants

mod exit;
mod location;
mod membership;

pub use exit::*;
pub use location::*;
pub use membership::*;

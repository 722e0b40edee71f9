//! World state - the arena that owns every location of the world graph.

use std::collections::HashMap;

use crate::entities::{LocationId, OccupantId};
use crate::error::{Result, WorldError};
use crate::topology::{Destination, Exit, Location};

/// All locations of a world, in insertion order.
///
/// Exits refer to their destinations by id; the world resolves those ids back
/// to locations.
#[derive(Debug, Clone, Default)]
pub struct World {
    locations: Vec<Location>,
    /// Index: LocationId -> position in `locations`.
    index: HashMap<LocationId, usize>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location to the world.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateLocation`] if a location with the same id
    /// (for example a clone) is already part of this world.
    pub fn add_location(&mut self, location: Location) -> Result<LocationId> {
        let id = location.id();
        if self.index.contains_key(&id) {
            return Err(WorldError::DuplicateLocation(id));
        }
        self.index.insert(id, self.locations.len());
        self.locations.push(location);
        Ok(id)
    }

    /// Get location by ID.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.index.get(&id).map(|&i| &self.locations[i])
    }

    /// Get mutable location by ID.
    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.index.get(&id).map(|&i| &mut self.locations[i])
    }

    /// First location added with this name.
    pub fn location_named(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| *location == name)
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Number of locations in the world.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if the world has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Build an exit from `from` to `to` and attach it to `from`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownLocation`] if either id is not in this
    /// world, or [`WorldError::DuplicateExitName`] if `from` already has an
    /// exit with one of the names.
    pub fn connect<I, S>(
        &mut self,
        from: LocationId,
        to: LocationId,
        primary_name: impl Into<String>,
        aliases: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let destination =
            Destination::from(self.location(to).ok_or(WorldError::UnknownLocation(to))?);
        let exit = Exit::with_aliases(destination, primary_name, aliases);
        self.location_mut(from)
            .ok_or(WorldError::UnknownLocation(from))?
            .add_exit(exit)
    }

    /// The location an exit leads to, if it belongs to this world.
    pub fn destination(&self, exit: &Exit) -> Option<&Location> {
        self.location(exit.destination().id())
    }

    /// Follow the exit named `name` out of `from`.
    pub fn follow_exit(&self, from: LocationId, name: &str) -> Option<&Location> {
        let exit = self.location(from)?.exit_named(name)?;
        self.destination(exit)
    }

    /// Every location that lists the occupant.
    pub fn locate_occupant(&self, id: OccupantId) -> Vec<LocationId> {
        self.locations
            .iter()
            .filter(|location| location.has_occupant(id))
            .map(Location::id)
            .collect()
    }
}

//! Turns a checked world definition into a live [`World`].

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use mud_world::{Location, LocationId, World};

use crate::definition::WorldDefinition;
use crate::error::LoadError;
use crate::validator::validate_world;

impl WorldDefinition {
    /// Validate the definition and build the world it describes.
    ///
    /// Locations are created first so exits can point at any of them; exits
    /// and occupants are then attached in file order.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Invalid`] with every problem found if the
    /// definition is malformed.
    pub fn build(&self) -> Result<World, LoadError> {
        let issues = validate_world(self);
        if !issues.is_empty() {
            return Err(LoadError::Invalid(issues));
        }

        let mut world = World::new();
        let mut ids: HashMap<&str, LocationId> = HashMap::new();
        for definition in &self.locations {
            let id = world.add_location(Location::new(
                definition.name.as_str(),
                definition.description.as_str(),
            ))?;
            ids.insert(definition.name.as_str(), id);
        }

        for definition in &self.locations {
            let from = ids[definition.name.as_str()];
            for exit in &definition.exits {
                let to = ids[exit.destination.as_str()];
                // Validation guarantees every exit has a name.
                let Some((primary, aliases)) = exit.names.split_first() else {
                    continue;
                };
                world.connect(from, to, primary.as_str(), aliases)?;
            }

            if let Some(location) = world.location_mut(from) {
                for &occupant in &definition.occupants {
                    location.add_occupant(occupant);
                }
            }
            debug!(location = %definition.name, exits = definition.exits.len(), "location wired");
        }

        info!(locations = world.len(), "world built");
        Ok(world)
    }
}

/// Read, validate and build a world from a `.toml` or `.json` file.
pub fn load_world(path: impl AsRef<Path>) -> Result<World, LoadError> {
    WorldDefinition::from_path(path)?.build()
}

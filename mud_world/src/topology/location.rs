//! Locations - the nodes of the world graph.

use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

use super::{Exit, Membership};
use crate::entities::{LocationId, OccupantId};
use crate::error::{Result, WorldError};

/// A location in the game world.
///
/// Holds its outgoing exits in insertion order and the occupants currently
/// present. No two exits of a location may share a name.
#[derive(Debug, Clone)]
pub struct Location {
    id: LocationId,
    name: String,
    pub description: String,
    exits: Vec<Exit>,
    occupants: Vec<OccupantId>,
    /// Reserved for ownership of locations; nothing reads it yet.
    owner: Option<OccupantId>,
}

impl Location {
    /// Create a location with no exits, no occupants and no owner.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: LocationId::new(),
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            occupants: Vec::new(),
            owner: None,
        }
    }

    /// Get the location's unique ID.
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Get the name that identifies this location in lookups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the owner, if one has been assigned.
    pub fn owner(&self) -> Option<OccupantId> {
        self.owner
    }

    /// Assign or clear the owner.
    pub fn set_owner(&mut self, owner: Option<OccupantId>) {
        self.owner = owner;
    }

    /// Add an occupant. The same id may be listed more than once.
    pub fn add_occupant(&mut self, id: impl Into<OccupantId>) {
        let id = id.into();
        debug!(location = %self.name, occupant = %id, "occupant added");
        self.occupants.push(id);
    }

    /// Remove the first occurrence of an occupant.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::OccupantNotFound`] if the occupant is not here.
    pub fn remove_occupant(&mut self, id: impl Into<OccupantId>) -> Result<()> {
        let id = id.into();
        let Some(position) = self.occupants.iter().position(|o| *o == id) else {
            warn!(location = %self.name, occupant = %id, "occupant to remove is not present");
            return Err(WorldError::OccupantNotFound {
                location: self.name.clone(),
                occupant: id,
            });
        };
        self.occupants.remove(position);
        debug!(location = %self.name, occupant = %id, "occupant removed");
        Ok(())
    }

    /// Snapshot of the occupants in arrival order.
    pub fn occupants(&self) -> Vec<OccupantId> {
        self.occupants.clone()
    }

    /// Check if the occupant is present.
    pub fn has_occupant(&self, id: impl Into<OccupantId>) -> bool {
        self.occupants.contains(&id.into())
    }

    /// Attach an exit, keeping insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateExitName`] if any of the exit's names is
    /// already used by an exit of this location. The location is unchanged.
    pub fn add_exit(&mut self, exit: Exit) -> Result<()> {
        if let Some(name) = exit.iter().find(|name| self.has_exit_named(name)) {
            warn!(location = %self.name, exit = %exit, name = %name, "exit name collision");
            return Err(WorldError::DuplicateExitName {
                location: self.name.clone(),
                exit: exit.to_string(),
                name: name.clone(),
            });
        }
        debug!(location = %self.name, exit = %exit, "exit added");
        self.exits.push(exit);
        Ok(())
    }

    /// Snapshot of the exits in insertion order.
    pub fn exits(&self) -> Vec<Exit> {
        self.exits.clone()
    }

    /// The exit answering to `name`, if any.
    pub fn exit_named(&self, name: &str) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.has_name(name))
    }

    /// Check if any exit answers to `name`.
    pub fn has_exit_named(&self, name: &str) -> bool {
        self.exit_named(name).is_some()
    }

    /// Check for an exit leading to the same destination as `exit`.
    pub fn has_exit(&self, exit: &Exit) -> bool {
        self.exits.iter().any(|own| own.equals_exit(exit))
    }

    /// Unified membership test over exits, exit names and occupants.
    pub fn contains<'a>(&self, member: impl Into<Membership<'a>>) -> bool {
        match member.into() {
            Membership::Exit(exit) => self.has_exit(exit),
            Membership::Name(name) => self.has_exit_named(name),
            Membership::Occupant(id) => self.has_occupant(id),
        }
    }

    /// Membership test for loosely typed input such as a parsed command
    /// argument. Strings are exit names and non-negative integers are
    /// occupant ids.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidArgument`] for any other kind of value.
    pub fn contains_value(&self, value: &Value) -> Result<bool> {
        let member = Membership::try_from(value)?;
        Ok(self.contains(member))
    }

    /// Render the location. Verbose output adds the description on a new line.
    pub fn describe(&self, verbose: bool) -> String {
        if verbose {
            format!("{}:\n{}", self.name, self.description)
        } else {
            self.name.clone()
        }
    }
}

impl PartialEq<str> for Location {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Location {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl PartialEq<String> for Location {
    fn eq(&self, other: &String) -> bool {
        self.name == *other
    }
}

/// `{}` prints the name, `{:#}` adds the description.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verbose = f.alternate();
        f.write_str(&self.describe(verbose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square() -> Location {
        Location::new("Town Square", "A bustling plaza")
    }

    #[test]
    fn test_new_location_is_empty() {
        let location = square();
        assert!(location.exits().is_empty());
        assert!(location.occupants().is_empty());
        assert!(location.owner().is_none());
    }

    #[test]
    fn test_describe() {
        let location = square();
        assert_eq!(location.to_string(), "Town Square");
        assert_eq!(location.describe(false), "Town Square");
        assert_eq!(location.describe(true), "Town Square:\nA bustling plaza");
        assert_eq!(format!("{location:#}"), "Town Square:\nA bustling plaza");
    }

    #[test]
    fn test_equals_name() {
        let location = square();
        assert!(location == "Town Square");
        assert!(location == String::from("Town Square"));
        assert!(location != "town square");
    }

    #[test]
    fn test_occupants_allow_duplicates_and_keep_order() {
        let mut location = square();
        location.add_occupant(3u64);
        location.add_occupant(1u64);
        location.add_occupant(3u64);
        assert_eq!(
            location.occupants(),
            vec![OccupantId(3), OccupantId(1), OccupantId(3)]
        );

        location.remove_occupant(3u64).unwrap();
        assert_eq!(location.occupants(), vec![OccupantId(1), OccupantId(3)]);
        assert!(location.contains(OccupantId(3)));
    }

    #[test]
    fn test_remove_missing_occupant() {
        let mut location = square();
        location.add_occupant(7u64);
        location.remove_occupant(7u64).unwrap();
        assert!(!location.contains(7u64));

        let err = location.remove_occupant(7u64).unwrap_err();
        assert!(matches!(
            err,
            WorldError::OccupantNotFound { occupant: OccupantId(7), .. }
        ));
    }

    #[test]
    fn test_snapshots_are_copies() {
        let mut location = square();
        let forest = Location::new("Forest", "Trees.");
        location.add_occupant(1u64);
        location.add_exit(Exit::new(&forest, "north")).unwrap();

        let mut occupants = location.occupants();
        occupants.push(OccupantId(2));
        occupants.clear();
        let mut exits = location.exits();
        exits.clear();

        assert_eq!(location.occupants(), vec![OccupantId(1)]);
        assert_eq!(location.exits().len(), 1);
    }

    #[test]
    fn test_add_exit_rejects_shared_alias() {
        let mut location = square();
        let forest = Location::new("Forest", "Trees.");
        let river = Location::new("River", "Water.");
        location
            .add_exit(Exit::with_aliases(&forest, "north", ["n"]))
            .unwrap();

        let err = location
            .add_exit(Exit::with_aliases(&river, "n", ["south"]))
            .unwrap_err();
        assert_eq!(
            err,
            WorldError::DuplicateExitName {
                location: "Town Square".into(),
                exit: "n: River".into(),
                name: "n".into(),
            }
        );
        assert_eq!(location.exits().len(), 1);
        assert!(!location.contains("south"));
    }

    #[test]
    fn test_add_exit_allows_second_exit_to_same_destination() {
        let mut location = square();
        let forest = Location::new("Forest", "Trees.");
        location.add_exit(Exit::new(&forest, "north")).unwrap();
        location.add_exit(Exit::new(&forest, "path")).unwrap();

        let names: Vec<String> = location
            .exits()
            .iter()
            .map(|exit| exit.primary_name().to_owned())
            .collect();
        assert_eq!(names, ["north", "path"]);
    }

    #[test]
    fn test_contains_exit_or_name() {
        let mut location = square();
        let forest = Location::new("Forest", "Trees.");
        let river = Location::new("River", "Water.");
        let exit = Exit::with_aliases(&forest, "north", ["n"]);
        location.add_exit(exit.clone()).unwrap();

        assert!(location.contains(&exit));
        assert!(location.contains(&Exit::new(&forest, "elsewhere")));
        assert!(!location.contains(&Exit::new(&river, "north")));
        assert!(location.contains("n"));
        assert!(!location.contains("east"));
        assert_eq!(location.exit_named("n"), Some(&exit));
    }

    #[test]
    fn test_contains_value() {
        let mut location = square();
        let forest = Location::new("Forest", "Trees.");
        location.add_exit(Exit::new(&forest, "north")).unwrap();
        location.add_occupant(9u64);

        assert!(location.contains_value(&json!("north")).unwrap());
        assert!(location.contains_value(&json!(9)).unwrap());
        assert!(!location.contains_value(&json!(10)).unwrap());

        let err = location.contains_value(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, WorldError::InvalidArgument(_)));
    }

    #[test]
    fn test_set_owner() {
        let mut location = square();
        location.set_owner(Some(OccupantId(4)));
        assert_eq!(location.owner(), Some(OccupantId(4)));

        location.set_owner(None);
        assert!(location.owner().is_none());
    }
}

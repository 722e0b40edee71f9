//! Exits - named edges from one location to another.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Location;
use crate::entities::LocationId;

/// Handle to the location an exit leads to.
///
/// The exit does not own its destination; it keeps the id for lookups in a
/// [`World`](crate::World) and the name for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    id: LocationId,
    name: String,
}

impl Destination {
    /// Create a destination handle from a location id and name.
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Get the destination's location ID.
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Get the destination's name, used for display.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&Location> for Destination {
    fn from(location: &Location) -> Self {
        Self::new(location.id(), location.name())
    }
}

/// A named exit leading to a destination location.
///
/// An exit always carries at least one name. The first is the primary name
/// used for display, the rest are aliases. Names are fixed once the exit is
/// built.
#[derive(Debug, Clone)]
pub struct Exit {
    destination: Destination,
    names: Vec<String>,
}

impl Exit {
    /// Create an exit with a single name.
    pub fn new(destination: impl Into<Destination>, primary_name: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            names: vec![primary_name.into()],
        }
    }

    /// Create an exit with a primary name followed by aliases.
    pub fn with_aliases<I, S>(
        destination: impl Into<Destination>,
        primary_name: impl Into<String>,
        aliases: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut exit = Self::new(destination, primary_name);
        exit.names.extend(aliases.into_iter().map(Into::into));
        exit
    }

    /// Get the handle of the location this exit leads to.
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Get the primary name, the first one given.
    pub fn primary_name(&self) -> &str {
        &self.names[0]
    }

    /// All names in storage order, primary first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over the names in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    /// Check if `candidate` is one of this exit's names.
    pub fn has_name(&self, candidate: &str) -> bool {
        self.names.iter().any(|name| name == candidate)
    }

    /// Two exits are equal when they lead to the same location, whatever
    /// their names.
    pub fn equals_exit(&self, other: &Exit) -> bool {
        self.destination.id == other.destination.id
    }

    /// Match against another exit (same destination) or a name.
    pub fn matches<'a>(&self, candidate: impl Into<ExitMatch<'a>>) -> bool {
        match candidate.into() {
            ExitMatch::Exit(other) => self.equals_exit(other),
            ExitMatch::Name(name) => self.has_name(name),
        }
    }
}

/// Something an exit can be matched against.
#[derive(Debug, Clone, Copy)]
pub enum ExitMatch<'a> {
    Exit(&'a Exit),
    Name(&'a str),
}

impl<'a> From<&'a Exit> for ExitMatch<'a> {
    fn from(exit: &'a Exit) -> Self {
        ExitMatch::Exit(exit)
    }
}

impl<'a> From<&'a str> for ExitMatch<'a> {
    fn from(name: &'a str) -> Self {
        ExitMatch::Name(name)
    }
}

impl<'a> From<&'a String> for ExitMatch<'a> {
    fn from(name: &'a String) -> Self {
        ExitMatch::Name(name)
    }
}

impl PartialEq for Exit {
    fn eq(&self, other: &Exit) -> bool {
        self.equals_exit(other)
    }
}

impl Eq for Exit {}

impl PartialEq<str> for Exit {
    fn eq(&self, other: &str) -> bool {
        self.has_name(other)
    }
}

impl PartialEq<&str> for Exit {
    fn eq(&self, other: &&str) -> bool {
        self.has_name(other)
    }
}

impl PartialEq<String> for Exit {
    fn eq(&self, other: &String) -> bool {
        self.has_name(other)
    }
}

impl<'a> IntoIterator for &'a Exit {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.primary_name(), self.destination.name)
    }
}

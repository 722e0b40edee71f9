//! Structural checks run over a definition before any location is built.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::definition::WorldDefinition;

/// A single problem found in a world definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    DuplicateLocation(String),
    UnnamedExit {
        location: String,
        destination: String,
    },
    UnknownDestination {
        location: String,
        exit: String,
        destination: String,
    },
    DuplicateExitName {
        location: String,
        name: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateLocation(name) => {
                write!(f, "location '{name}' is defined more than once")
            }
            ValidationIssue::UnnamedExit {
                location,
                destination,
            } => write!(
                f,
                "location '{location}' has an exit to '{destination}' with no names"
            ),
            ValidationIssue::UnknownDestination {
                location,
                exit,
                destination,
            } => write!(
                f,
                "location '{location}' exit '{exit}' targets missing location '{destination}'"
            ),
            ValidationIssue::DuplicateExitName { location, name } => {
                write!(f, "location '{location}' has more than one exit named '{name}'")
            }
        }
    }
}

/// Collect every problem in the definition. An empty result means the world
/// can be built.
pub fn validate_world(definition: &WorldDefinition) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for location in &definition.locations {
        let count = seen.entry(location.name.as_str()).or_default();
        *count += 1;
        if *count == 2 {
            issues.push(ValidationIssue::DuplicateLocation(location.name.clone()));
        }
    }

    for location in &definition.locations {
        let mut exit_names: HashSet<&str> = HashSet::new();
        for exit in &location.exits {
            if !seen.contains_key(exit.destination.as_str()) {
                // Unnamed exits are labelled by their destination.
                let label = exit.names.first().unwrap_or(&exit.destination);
                issues.push(ValidationIssue::UnknownDestination {
                    location: location.name.clone(),
                    exit: label.clone(),
                    destination: exit.destination.clone(),
                });
            }

            if exit.names.is_empty() {
                issues.push(ValidationIssue::UnnamedExit {
                    location: location.name.clone(),
                    destination: exit.destination.clone(),
                });
                continue;
            }

            for name in &exit.names {
                if !exit_names.insert(name.as_str()) {
                    issues.push(ValidationIssue::DuplicateExitName {
                        location: location.name.clone(),
                        name: name.clone(),
                    });
                }
            }
        }
    }

    issues
}

//! Serde types for world definition files.
//!
//! TOML layout:
//!
//! ```toml
//! [[location]]
//! name = "Town Square"
//! description = "A bustling plaza"
//! occupants = [1, 2]
//!
//! [[location.exit]]
//! destination = "Forest"
//! names = ["north", "n"]
//! ```
//!
//! JSON uses the same field names.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// A whole world, one entry per location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDefinition {
    #[serde(default, rename = "location")]
    pub locations: Vec<LocationDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "exit")]
    pub exits: Vec<ExitDefinition>,
    #[serde(default)]
    pub occupants: Vec<u64>,
}

/// An exit by destination name; the first name is the primary one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDefinition {
    pub destination: String,
    pub names: Vec<String>,
}

impl WorldDefinition {
    pub fn from_toml_str(source: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read a definition file, choosing the format by extension
    /// (`.toml` or `.json`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let parse: fn(&str) -> Result<Self, LoadError> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => Self::from_toml_str,
                Some("json") => Self::from_json_str,
                _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
            };
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }
}

//! Loader error types.

use std::path::PathBuf;
use thiserror::Error;

use mud_world::WorldError;

use crate::validator::ValidationIssue;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML world definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON world definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported world definition format: {0}")]
    UnsupportedFormat(PathBuf),

    /// The definition parsed but describes a malformed world.
    #[error("world definition has {} problem(s): {}", .0.len(), join_issues(.0))]
    Invalid(Vec<ValidationIssue>),

    #[error(transparent)]
    World(#[from] WorldError),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

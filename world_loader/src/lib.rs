//! # World Loader
//!
//! Builds a [`mud_world::World`] from an authored world definition.
//!
//! World data is expected to be correct. The loader checks the whole
//! definition up front and reports every problem at once, so that
//! [`Location::add_exit`](mud_world::Location::add_exit) never has to reject
//! anything while the world is being wired.
//!
//! ## Core Components
//!
//! - **definition**: serde types mirroring the TOML/JSON world file
//! - **validator**: collects structural problems before construction
//! - **builder**: turns a checked definition into a live world

pub mod builder;
pub mod definition;
pub mod error;
pub mod validator;

pub use builder::*;
pub use definition::*;
pub use error::*;
pub use validator::*;

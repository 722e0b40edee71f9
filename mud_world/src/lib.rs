//! # Mud World
//!
//! The static topology of a text-adventure world: named locations joined by
//! named exits, with the occupants currently present at each location.
//! This crate holds data and structural rules only. Command parsing, the game
//! loop and networking are callers of this model.

pub mod entities;
pub mod error;
pub mod topology;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use topology::*;
pub use world_state::*;

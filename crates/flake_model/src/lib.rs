//! Flake Model - Tile identity and measured height input
//!
//! This crate provides the inputs the masonry engine consumes: stable flake
//! IDs, the ordered tile abstraction, and the per-pass height map supplied by
//! the host's measurement service.

mod error;
mod flake;
mod flake_id;
mod height_map;

pub use error::*;
pub use flake::*;
pub use flake_id::*;
pub use height_map::*;

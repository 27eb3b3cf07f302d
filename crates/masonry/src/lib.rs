//! Masonry Engine - Gap-free tile packing for flake piles
//!
//! This crate turns an ordered list of tiles, their measured heights, and a
//! set of layout options into the pixel rectangle of every tile plus the
//! canvas size the renderer has to allocate. Three flows are supported:
//! - Vertical: balanced columns, shortest column first
//! - Horizontal: fixed-width columns filled top to bottom, with optional
//!   fair redistribution of leftover height
//! - Compact: a single full-width column for narrow containers
//!
//! Every entry point is a pure function of its inputs.

mod compact;
mod error;
mod flow;
mod geometry;
mod horizontal;
mod options;
mod vertical;

pub use compact::*;
pub use error::*;
pub use flow::*;
pub use geometry::*;
pub use horizontal::*;
pub use options::*;
pub use vertical::*;

pub use flake_model::{Flake, FlakeId, HeightMap, Tile};

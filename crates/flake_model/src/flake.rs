//! Flakes and the tile abstraction the layout engine orders by

use crate::FlakeId;
use serde::{Deserialize, Serialize};

/// Anything the masonry engine can place.
///
/// Layout only reads the id; the position of the tile in the caller's slice
/// decides placement order and tie-breaking.
pub trait Tile {
    fn flake_id(&self) -> FlakeId;
}

impl Tile for FlakeId {
    fn flake_id(&self) -> FlakeId {
        *self
    }
}

impl<T: Tile + ?Sized> Tile for &T {
    fn flake_id(&self) -> FlakeId {
        (**self).flake_id()
    }
}

/// A content tile as handed over by the pile's persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flake {
    pub id: FlakeId,
    /// Display name, shown in the tile header
    #[serde(default)]
    pub name: String,
}

impl Flake {
    /// Create a new flake with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FlakeId::new(),
            name: name.into(),
        }
    }

    /// Create a flake with a known id
    pub fn with_id(id: FlakeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Tile for Flake {
    fn flake_id(&self) -> FlakeId {
        self.id
    }
}

//! Flake IDs
//!
//! Generated once when a flake is created and persisted with the pile; the
//! string form is the hyphenated UUID.

use crate::{FlakeModelError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a flake in a pile.
/// Uses UUID v4 so IDs stay stable across saves and reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlakeId(Uuid);

impl FlakeId {
    /// Create a new random FlakeId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FlakeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FlakeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FlakeId {
    type Err = FlakeModelError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| FlakeModelError::InvalidId(s.to_string()))
    }
}

//! Measured tile heights for one layout pass

use crate::{FlakeId, FlakeModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from flake id to its measured content height in pixels.
///
/// Owned by the caller and rebuilt whenever content is re-measured. A flake
/// with no usable entry is not laid out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeightMap {
    heights: HashMap<FlakeId, f32>,
}

impl HeightMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measured height, replacing any earlier measurement
    pub fn insert(&mut self, id: FlakeId, height: f32) -> Option<f32> {
        self.heights.insert(id, height)
    }

    /// Record a measured height, rejecting values layout could never place
    pub fn try_insert(&mut self, id: FlakeId, height: f32) -> Result<Option<f32>> {
        if !is_measurable(height) {
            return Err(FlakeModelError::InvalidHeight {
                id: id.to_string(),
                height,
            });
        }
        Ok(self.insert(id, height))
    }

    pub fn remove(&mut self, id: &FlakeId) -> Option<f32> {
        self.heights.remove(id)
    }

    /// Raw entry, if any
    pub fn get(&self, id: &FlakeId) -> Option<f32> {
        self.heights.get(id).copied()
    }

    /// The height of a flake if it can be placed.
    ///
    /// Zero, negative and non-finite entries count as not yet measured.
    pub fn measured(&self, id: &FlakeId) -> Option<f32> {
        self.get(id).filter(|h| is_measurable(*h))
    }

    pub fn contains(&self, id: &FlakeId) -> bool {
        self.heights.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FlakeId, &f32)> {
        self.heights.iter()
    }
}

impl FromIterator<(FlakeId, f32)> for HeightMap {
    fn from_iter<I: IntoIterator<Item = (FlakeId, f32)>>(iter: I) -> Self {
        Self {
            heights: iter.into_iter().collect(),
        }
    }
}

impl Extend<(FlakeId, f32)> for HeightMap {
    fn extend<I: IntoIterator<Item = (FlakeId, f32)>>(&mut self, iter: I) {
        self.heights.extend(iter);
    }
}

impl From<HashMap<FlakeId, f32>> for HeightMap {
    fn from(heights: HashMap<FlakeId, f32>) -> Self {
        Self { heights }
    }
}

fn is_measurable(height: f32) -> bool {
    height.is_finite() && height > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_skips_unusable_entries() {
        let ok = FlakeId::new();
        let zero = FlakeId::new();
        let negative = FlakeId::new();
        let nan = FlakeId::new();
        let missing = FlakeId::new();

        let map: HeightMap = [(ok, 120.0), (zero, 0.0), (negative, -4.0), (nan, f32::NAN)]
            .into_iter()
            .collect();

        assert_eq!(map.measured(&ok), Some(120.0));
        assert_eq!(map.measured(&zero), None);
        assert_eq!(map.measured(&negative), None);
        assert_eq!(map.measured(&nan), None);
        assert_eq!(map.measured(&missing), None);
        assert!(map.contains(&zero));
        assert!(!map.contains(&missing));
    }

    #[test]
    fn test_try_insert_rejects_zero() {
        let mut map = HeightMap::new();
        let id = FlakeId::new();
        assert!(map.try_insert(id, 0.0).is_err());
        assert!(map.is_empty());

        assert_eq!(map.try_insert(id, 40.0).unwrap(), None);
        assert_eq!(map.try_insert(id, 60.0).unwrap(), Some(40.0));
        assert_eq!(map.len(), 1);
    }
}

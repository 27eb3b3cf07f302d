//! Geometry primitives shared by every flow

use flake_model::FlakeId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Width of one tile unit in pixels
pub const FLAKE_UNIT: f32 = 320.0;
/// Horizontal space between neighbouring columns
pub const GAP_X: f32 = 12.0;
/// Vertical space between stacked tiles
pub const GAP_Y: f32 = 12.0;
/// Left and right canvas padding
pub const PAD_X: f32 = 16.0;
/// Top and bottom canvas padding
pub const PAD_Y: f32 = 8.0;

/// A rectangle in viewport-local coordinates, origin top-left
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether the two rectangles share any interior area
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The outcome of one layout pass.
///
/// Built fresh on every pass; `placed`, `rects` and `order` always describe
/// the same set of flakes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// Flakes that received a rectangle
    pub placed: BTreeSet<FlakeId>,
    /// Rectangle per placed flake
    pub rects: BTreeMap<FlakeId, Rect>,
    /// Placed flakes in caller order
    pub order: Vec<FlakeId>,
    /// Bounding box the renderer must allocate, padding included
    pub canvas: Size,
}

impl LayoutResult {
    /// Create an empty result with a zero canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rectangle of a flake
    pub(crate) fn place(&mut self, id: FlakeId, rect: Rect) {
        if self.placed.insert(id) {
            self.order.push(id);
        }
        self.rects.insert(id, rect);
    }

    pub fn rect(&self, id: &FlakeId) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn contains(&self, id: &FlakeId) -> bool {
        self.placed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Rectangles in placement order
    pub fn iter(&self) -> impl Iterator<Item = (FlakeId, &Rect)> {
        self.order
            .iter()
            .filter_map(move |id| self.rects.get(id).map(|rect| (*id, rect)))
    }

    /// Find the flake under a canvas point
    pub fn hit_test(&self, x: f32, y: f32) -> Option<FlakeId> {
        self.iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(16.0, 8.0, 320.0, 100.0);
        assert_eq!(rect.right(), 336.0);
        assert_eq!(rect.bottom(), 108.0);
        assert!(rect.contains(16.0, 8.0));
        assert!(!rect.contains(336.0, 50.0));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let touching = Rect::new(100.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn test_empty_result() {
        let result = LayoutResult::new();
        assert!(result.is_empty());
        assert_eq!(result.canvas, Size::new(0.0, 0.0));
        assert_eq!(result.hit_test(0.0, 0.0), None);
    }

    #[test]
    fn test_place_keeps_sets_in_sync() {
        let mut result = LayoutResult::new();
        let id = FlakeId::new();
        result.place(id, Rect::new(0.0, 0.0, 10.0, 10.0));
        result.place(id, Rect::new(0.0, 0.0, 10.0, 20.0));

        assert_eq!(result.len(), 1);
        assert_eq!(result.placed.len(), result.rects.len());
        assert_eq!(result.rect(&id).unwrap().height, 20.0);
        assert_eq!(result.hit_test(5.0, 15.0), Some(id));
    }
}

//! Compact Flow (single column for narrow containers)
//!
//! Tiles are stacked top to bottom at the full usable width, in caller order.
//! The height cap is not applied here: compact flow always shows tiles at
//! their natural height, even when the options enable a cap for the other
//! flows.

use crate::{CompactOptions, LayoutResult, Rect, Size, GAP_Y, PAD_X, PAD_Y};
use flake_model::{HeightMap, Tile};

/// Width of every tile in compact flow
pub fn compact_width(options: &CompactOptions) -> f32 {
    (options.container_width - 2.0 * PAD_X).max(0.0)
}

/// Stack tiles in a single full-width column
pub fn resolve_compact<T: Tile>(
    tiles: &[T],
    heights: &HeightMap,
    options: &CompactOptions,
) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = compact_width(options);
    let mut y = PAD_Y;

    for tile in tiles {
        let id = tile.flake_id();
        let Some(height) = heights.measured(&id) else {
            tracing::trace!(%id, "skipping unmeasured flake");
            continue;
        };

        result.place(id, Rect::new(PAD_X, y, width, height));
        y += height + GAP_Y;
    }

    result.canvas = Size::new(options.container_width.max(2.0 * PAD_X), y + PAD_Y);

    tracing::debug!(
        flow = "compact",
        tiles = tiles.len(),
        placed = result.len(),
        canvas_width = result.canvas.width,
        canvas_height = result.canvas.height,
        "resolved masonry"
    );

    result
}

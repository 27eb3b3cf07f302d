//! Vertical Flow (balanced columns)
//!
//! Tiles are dealt into a fixed number of columns. Each tile goes to the
//! column that is currently shortest, so column heights stay close to each
//! other. This is a greedy heuristic, not an optimal bin packing.
//!
//! The canvas is as wide as the container, unless the gaps of a fixed-width
//! column block overrun it; then the canvas widens to fit the block.

use crate::{LayoutResult, Rect, Size, VerticalOptions, GAP_X, GAP_Y, PAD_X, PAD_Y};
use flake_model::{HeightMap, Tile};

/// Column count and per-column width for a vertical pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnBasis {
    /// Width of every column in pixels
    pub width: f32,
    /// Number of columns, at least one
    pub count: usize,
}

impl ColumnBasis {
    /// Total width covered by the columns and the gaps between them
    pub fn span(&self) -> f32 {
        self.count as f32 * self.width + (self.count - 1) as f32 * GAP_X
    }
}

/// Usable width of the vertical canvas, inside the horizontal padding
fn usable_width(container_width: f32) -> f32 {
    (container_width - 2.0 * PAD_X).max(0.0)
}

/// Compute how many columns fit and how wide they are
pub fn column_basis(options: &VerticalOptions) -> ColumnBasis {
    let usable = usable_width(options.container_width);
    let nominal = options.nominal_width();

    // A tile as wide as the container (or a nonsense width) gets one column.
    if !(nominal > 0.0) || nominal >= usable {
        return ColumnBasis {
            width: usable,
            count: 1,
        };
    }

    if options.elastic_width {
        let count = (((usable + GAP_X) / (nominal + GAP_X)).floor() as usize).max(1);
        let width = (usable - GAP_X * (count - 1) as f32) / count as f32;
        ColumnBasis { width, count }
    } else {
        let count = ((usable / nominal).floor() as usize).max(1);
        ColumnBasis {
            width: nominal,
            count,
        }
    }
}

/// Lay out tiles in balanced vertical columns
pub fn resolve_vertical<T: Tile>(
    tiles: &[T],
    heights: &HeightMap,
    options: &VerticalOptions,
) -> LayoutResult {
    let mut result = LayoutResult::new();
    let basis = column_basis(options);
    let usable = usable_width(options.container_width);

    // Center the column block; when the gaps overrun the usable width the
    // block starts at the padding and the canvas grows instead.
    let left = PAD_X + ((usable - basis.span()) / 2.0).max(0.0);
    let column_x = |column: usize| left + column as f32 * (basis.width + GAP_X);

    // Empty columns are picked leftmost first, so columns past the number of
    // placeable tiles are never reached.
    let placeable = tiles
        .iter()
        .filter(|tile| heights.measured(&tile.flake_id()).is_some())
        .count();
    let mut columns = vec![0.0_f32; basis.count.min(placeable).max(1)];

    for tile in tiles {
        let id = tile.flake_id();
        let Some(height) = heights.measured(&id) else {
            tracing::trace!(%id, "skipping unmeasured flake");
            continue;
        };

        let (column, running) = shortest_column(&columns);
        let effective = match options.max_height {
            Some(cap) if height > cap => cap,
            _ => height,
        };

        tracing::trace!(%id, column, y = running, height = effective, "placed flake");
        result.place(
            id,
            Rect::new(column_x(column), PAD_Y + running, basis.width, effective),
        );
        columns[column] += effective + GAP_Y;
    }

    let tallest = columns.iter().copied().fold(0.0_f32, f32::max);
    let content_height = if result.is_empty() { 0.0 } else { tallest - GAP_Y };

    result.canvas = Size::new(
        options.container_width.max(basis.span() + 2.0 * PAD_X),
        content_height + 2.0 * PAD_Y,
    );

    tracing::debug!(
        flow = "vertical",
        tiles = tiles.len(),
        placed = result.len(),
        columns = basis.count,
        column_width = basis.width,
        canvas_width = result.canvas.width,
        canvas_height = result.canvas.height,
        "resolved masonry"
    );

    result
}

/// Index and height of the shortest column; the leftmost wins ties
fn shortest_column(columns: &[f32]) -> (usize, f32) {
    let mut shortest = 0;
    let mut shortest_height = f32::MAX;

    for (index, &height) in columns.iter().enumerate() {
        if height < shortest_height {
            shortest = index;
            shortest_height = height;
        }
    }

    (shortest, shortest_height)
}

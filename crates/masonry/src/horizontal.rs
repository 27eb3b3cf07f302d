//! Horizontal Flow (fixed-height columns, horizontal scroll)
//!
//! Tiles keep their nominal width and are stacked top to bottom inside a
//! column as tall as the container. When the next tile would not fit, the
//! column is closed and a new one starts to its right.
//!
//! With elastic height enabled, a closed column hands its unused height back
//! to the tiles that were cut off by the height cap, using max-min fair
//! sharing (see [`redistribute_leftover`]).

use crate::{HorizontalOptions, LayoutResult, Rect, Size, GAP_X, GAP_Y, PAD_X, PAD_Y};
use flake_model::{FlakeId, HeightMap, Tile};

/// A tile's claim on column height during redistribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightClaim {
    /// Natural, uncapped height
    pub requested: f32,
    /// Height granted so far
    pub allocated: f32,
}

impl HeightClaim {
    pub fn new(requested: f32, allocated: f32) -> Self {
        Self {
            requested,
            allocated,
        }
    }

    /// Height still missing to show the whole tile
    pub fn deficit(&self) -> f32 {
        (self.requested - self.allocated).max(0.0)
    }

    pub fn is_overflowing(&self) -> bool {
        self.requested > self.allocated
    }
}

/// Share `leftover` among overflowing claims, water-filling style.
///
/// Each round looks at the claim with the smallest deficit. If an even split
/// of the leftover does not cover it, the split is handed out and the
/// process ends. Otherwise every overflowing claim receives that deficit, the
/// smallest one is satisfied and drops out, and the next round starts with
/// what is left. No claim ever exceeds its requested height, and the leftover
/// is used up before any claim is satisfied while another still starves.
///
/// Returns the leftover that could not be handed out because every claim was
/// satisfied.
pub fn redistribute_leftover(claims: &mut [HeightClaim], mut leftover: f32) -> f32 {
    let mut open: Vec<usize> = (0..claims.len())
        .filter(|&i| claims[i].is_overflowing())
        .collect();

    let mut round = 0;
    while leftover > 0.0 && !open.is_empty() {
        let (slot, least) = open
            .iter()
            .enumerate()
            .map(|(slot, &i)| (slot, claims[i].deficit()))
            .fold((0, f32::MAX), |best, candidate| {
                if candidate.1 < best.1 {
                    candidate
                } else {
                    best
                }
            });

        let each = leftover / open.len() as f32;
        tracing::trace!(
            round,
            overflowing = open.len(),
            leftover,
            each,
            least,
            "redistribution round"
        );

        if each <= least {
            for &i in &open {
                claims[i].allocated += each;
            }
            return 0.0;
        }

        for &i in &open {
            claims[i].allocated += least;
        }
        leftover -= least * open.len() as f32;

        let satisfied = open.remove(slot);
        claims[satisfied].allocated = claims[satisfied].requested;
        round += 1;
    }

    leftover.max(0.0)
}

/// Tiles of the column currently being filled, waiting for redistribution
struct PendingColumn {
    ids: Vec<FlakeId>,
    claims: Vec<HeightClaim>,
}

impl PendingColumn {
    fn new() -> Self {
        Self {
            ids: Vec::new(),
            claims: Vec::new(),
        }
    }

    fn push(&mut self, id: FlakeId, claim: HeightClaim) {
        self.ids.push(id);
        self.claims.push(claim);
    }

    /// Settle the column and emit its rectangles
    fn flush(&mut self, result: &mut LayoutResult, x: f32, width: f32, leftover: f32) {
        redistribute_leftover(&mut self.claims, leftover);

        let mut y = PAD_Y;
        for (id, claim) in self.ids.drain(..).zip(self.claims.drain(..)) {
            result.place(id, Rect::new(x, y, width, claim.allocated));
            y += claim.allocated + GAP_Y;
        }
    }
}

/// Lay out tiles in fixed-height columns that scroll horizontally
pub fn resolve_horizontal<T: Tile>(
    tiles: &[T],
    heights: &HeightMap,
    options: &HorizontalOptions,
) -> LayoutResult {
    let mut result = LayoutResult::new();

    let width = options.nominal_width();
    let usable = (options.container_height - 2.0 * PAD_Y).max(0.0);
    let cap = match options.max_height {
        Some(max_height) => max_height.min(usable),
        None => usable,
    };
    let column_x = |column: usize| PAD_X + (width + GAP_X) * column as f32;

    let mut column = 0;
    // Includes the gap after every tile already in the column.
    let mut column_height = 0.0_f32;
    let mut pending = PendingColumn::new();

    for tile in tiles {
        let id = tile.flake_id();
        let Some(height) = heights.measured(&id) else {
            tracing::trace!(%id, "skipping unmeasured flake");
            continue;
        };

        let capped = height.min(cap);

        if column_height > 0.0 && column_height + capped > usable {
            if options.elastic_height {
                let leftover = usable - column_height + GAP_Y;
                pending.flush(&mut result, column_x(column), width, leftover);
            }
            tracing::trace!(column, height = column_height, "closed column");
            column += 1;
            column_height = 0.0;
        }

        if options.elastic_height {
            pending.push(id, HeightClaim::new(height, capped));
        } else {
            result.place(
                id,
                Rect::new(column_x(column), PAD_Y + column_height, width, capped),
            );
        }

        column_height += capped + GAP_Y;
    }

    if options.elastic_height && !pending.ids.is_empty() {
        let leftover = usable - column_height + GAP_Y;
        pending.flush(&mut result, column_x(column), width, leftover);
    }

    let columns = (column + 1) as f32;
    result.canvas = Size::new(
        PAD_X * 2.0 + width * columns + GAP_X * (columns + 1.0),
        options.container_height.max(2.0 * PAD_Y),
    );

    tracing::debug!(
        flow = "horizontal",
        tiles = tiles.len(),
        placed = result.len(),
        columns = column + 1,
        elastic_height = options.elastic_height,
        canvas_width = result.canvas.width,
        canvas_height = result.canvas.height,
        "resolved masonry"
    );

    result
}

//! Flow dispatch
//!
//! Entry points used by the renderer. A pass picks the resolver for the
//! effective flow and returns its result untouched.

use crate::{
    column_basis, compact_width, resolve_compact, resolve_horizontal, resolve_vertical,
    FlowMode, FlowOptions, LayoutOptions, LayoutResult,
};
use flake_model::{HeightMap, Tile};

/// Compute the layout of one pass.
///
/// Tiles are placed in slice order; tiles without a usable height entry are
/// left out of the result.
pub fn compute_layout<T: Tile>(
    tiles: &[T],
    heights: &HeightMap,
    options: &LayoutOptions,
) -> LayoutResult {
    resolve_flow(tiles, heights, &options.flow_options())
}

/// Run the resolver matching already-narrowed flow options
pub fn resolve_flow<T: Tile>(
    tiles: &[T],
    heights: &HeightMap,
    options: &FlowOptions,
) -> LayoutResult {
    match options {
        FlowOptions::Vertical(vertical) => resolve_vertical(tiles, heights, vertical),
        FlowOptions::Horizontal(horizontal) => resolve_horizontal(tiles, heights, horizontal),
        FlowOptions::Compact(compact) => resolve_compact(tiles, heights, compact),
    }
}

/// Tile width a flow will use, available before heights are measured.
///
/// The host uses this to pick the wrap width when measuring tile content.
pub fn compute_unconstrained_width(flow: FlowMode, options: &LayoutOptions) -> f32 {
    match options.options_for(flow) {
        FlowOptions::Vertical(vertical) => column_basis(&vertical).width,
        FlowOptions::Horizontal(horizontal) => horizontal.nominal_width(),
        FlowOptions::Compact(compact) => compact_width(&compact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GAP_Y, PAD_Y};
    use flake_model::FlakeId;

    fn pile(heights: &[f32]) -> (Vec<FlakeId>, HeightMap) {
        let ids: Vec<FlakeId> = heights.iter().map(|_| FlakeId::new()).collect();
        let map = ids.iter().copied().zip(heights.iter().copied()).collect();
        (ids, map)
    }

    #[test]
    fn test_dispatches_on_flow() {
        let (ids, heights) = pile(&[100.0, 100.0]);

        let vertical = compute_layout(&ids, &heights, &LayoutOptions::vertical(1000.0));
        let first = vertical.rect(&ids[0]).unwrap();
        let second = vertical.rect(&ids[1]).unwrap();
        assert_eq!(first.y, second.y);

        let horizontal = compute_layout(&ids, &heights, &LayoutOptions::horizontal(656.0));
        let first = horizontal.rect(&ids[0]).unwrap();
        let second = horizontal.rect(&ids[1]).unwrap();
        assert_eq!(first.x, second.x);
        assert_eq!(horizontal.canvas.height, 656.0);

        let compact = compute_layout(&ids, &heights, &LayoutOptions::compact(400.0));
        assert_eq!(compact.rect(&ids[0]).unwrap().width, 368.0);
    }

    #[test]
    fn test_compact_ignores_max_height() {
        let (ids, heights) = pile(&[900.0]);
        let options = LayoutOptions::compact(400.0).with_max_height_units(1.0);

        let compact = compute_layout(&ids, &heights, &options);
        assert_eq!(compact.rect(&ids[0]).unwrap().height, 900.0);

        let options = options.with_flow(FlowMode::Vertical);
        let vertical = compute_layout(&ids, &heights, &options);
        assert_eq!(vertical.rect(&ids[0]).unwrap().height, 320.0);
    }

    #[test]
    fn test_breakpoint_switches_to_compact() {
        let (ids, heights) = pile(&[100.0, 100.0]);
        let options = LayoutOptions::vertical(500.0).with_compact_below_width(600.0);
        let result = compute_layout(&ids, &heights, &options);

        assert_eq!(result.rect(&ids[1]).unwrap().y, PAD_Y + 100.0 + GAP_Y);
        assert_eq!(result.rect(&ids[0]).unwrap().width, 468.0);
    }

    #[test]
    fn test_unconstrained_width() {
        let options = LayoutOptions::vertical(1000.0).with_container(1000.0, 656.0);
        assert_eq!(compute_unconstrained_width(FlowMode::Vertical, &options), 320.0);
        assert_eq!(compute_unconstrained_width(FlowMode::Horizontal, &options), 320.0);
        assert_eq!(compute_unconstrained_width(FlowMode::Compact, &options), 968.0);

        let elastic = options.with_elastic_width(true);
        assert!((compute_unconstrained_width(FlowMode::Vertical, &elastic) - 478.0).abs() < 0.001);
        // Horizontal flow never stretches.
        assert_eq!(compute_unconstrained_width(FlowMode::Horizontal, &elastic), 320.0);
    }

    #[test]
    fn test_unconstrained_width_narrow_container() {
        let options = LayoutOptions::vertical(200.0);
        assert_eq!(compute_unconstrained_width(FlowMode::Vertical, &options), 168.0);
    }
}

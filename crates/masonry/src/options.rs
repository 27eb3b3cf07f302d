//! Layout options and their per-flow projections
//!
//! `LayoutOptions` is the flat option bag the host stores alongside a pile and
//! rebuilds whenever the viewport changes. Resolvers never read it directly:
//! `LayoutOptions::flow_options` narrows it to the fields one flow consumes.

use crate::{MasonryError, Result, FLAKE_UNIT};
use serde::{Deserialize, Serialize};

// =============================================================================
// Flow Mode
// =============================================================================

/// Packing direction of a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowMode {
    /// Balanced columns, page scrolls vertically
    #[default]
    Vertical,
    /// Fixed-height columns, page scrolls horizontally
    Horizontal,
    /// One full-width column for narrow containers
    Compact,
}

impl FlowMode {
    pub fn name(&self) -> &'static str {
        match self {
            FlowMode::Vertical => "vertical",
            FlowMode::Horizontal => "horizontal",
            FlowMode::Compact => "compact",
        }
    }
}

// =============================================================================
// Layout Options
// =============================================================================

/// Layout policy for one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Requested flow; see `effective_flow` for the flow actually used
    pub flow: FlowMode,
    /// Tile width as a multiple of `FLAKE_UNIT`
    pub tile_width_units: f32,
    /// Stretch tiles to fill the available columns (vertical flow)
    pub elastic_width: bool,
    /// Cap rendered tile height at `max_height_units`
    pub enable_max_height: bool,
    /// Height cap as a multiple of `FLAKE_UNIT`
    pub max_height_units: f32,
    /// Let capped tiles reclaim unused column height (horizontal flow)
    pub elastic_height: bool,
    /// Available viewport width in pixels
    pub container_width: f32,
    /// Available viewport height in pixels
    pub container_height: f32,
    /// Switch to compact flow when the container is narrower than this
    pub compact_below_width: Option<f32>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            flow: FlowMode::Vertical,
            tile_width_units: 1.0,
            elastic_width: false,
            enable_max_height: false,
            max_height_units: 1.0,
            elastic_height: false,
            container_width: 0.0,
            container_height: 0.0,
            compact_below_width: None,
        }
    }
}

impl LayoutOptions {
    /// Create default options for a flow and container size
    pub fn new(flow: FlowMode, container_width: f32, container_height: f32) -> Self {
        Self {
            flow,
            container_width,
            container_height,
            ..Self::default()
        }
    }

    pub fn vertical(container_width: f32) -> Self {
        Self::new(FlowMode::Vertical, container_width, 0.0)
    }

    pub fn horizontal(container_height: f32) -> Self {
        Self::new(FlowMode::Horizontal, 0.0, container_height)
    }

    pub fn compact(container_width: f32) -> Self {
        Self::new(FlowMode::Compact, container_width, 0.0)
    }

    pub fn with_flow(mut self, flow: FlowMode) -> Self {
        self.flow = flow;
        self
    }

    pub fn with_tile_width_units(mut self, units: f32) -> Self {
        self.tile_width_units = units;
        self
    }

    pub fn with_elastic_width(mut self, elastic: bool) -> Self {
        self.elastic_width = elastic;
        self
    }

    /// Enable the height cap at the given number of units
    pub fn with_max_height_units(mut self, units: f32) -> Self {
        self.enable_max_height = true;
        self.max_height_units = units;
        self
    }

    pub fn with_elastic_height(mut self, elastic: bool) -> Self {
        self.elastic_height = elastic;
        self
    }

    pub fn with_container(mut self, width: f32, height: f32) -> Self {
        self.container_width = width;
        self.container_height = height;
        self
    }

    pub fn with_compact_below_width(mut self, width: f32) -> Self {
        self.compact_below_width = Some(width);
        self
    }

    /// Nominal tile width in pixels, before any stretching
    pub fn nominal_width(&self) -> f32 {
        self.tile_width_units * FLAKE_UNIT
    }

    /// The height cap in pixels, if capping is enabled
    pub fn max_height(&self) -> Option<f32> {
        self.enable_max_height
            .then(|| self.max_height_units * FLAKE_UNIT)
    }

    /// The flow used for this pass, after the narrow-container switch
    pub fn effective_flow(&self) -> FlowMode {
        match self.compact_below_width {
            Some(breakpoint) if self.container_width < breakpoint => FlowMode::Compact,
            _ => self.flow,
        }
    }

    /// Narrow the option bag to what the effective flow reads
    pub fn flow_options(&self) -> FlowOptions {
        self.options_for(self.effective_flow())
    }

    /// Narrow the option bag to what a given flow reads
    pub fn options_for(&self, flow: FlowMode) -> FlowOptions {
        match flow {
            FlowMode::Vertical => FlowOptions::Vertical(VerticalOptions {
                tile_width_units: self.tile_width_units,
                elastic_width: self.elastic_width,
                max_height: self.max_height(),
                container_width: self.container_width,
            }),
            FlowMode::Horizontal => FlowOptions::Horizontal(HorizontalOptions {
                tile_width_units: self.tile_width_units,
                max_height: self.max_height(),
                elastic_height: self.elastic_height,
                container_height: self.container_height,
            }),
            FlowMode::Compact => FlowOptions::Compact(CompactOptions {
                container_width: self.container_width,
            }),
        }
    }

    /// Check the options for values no layout pass can make sense of.
    ///
    /// Zero or negative container sizes are accepted; they produce a
    /// degenerate layout rather than an error.
    pub fn validate(&self) -> Result<()> {
        if !self.tile_width_units.is_finite() || self.tile_width_units <= 0.0 {
            return Err(MasonryError::InvalidOptions(format!(
                "tileWidthUnits must be positive, got {}",
                self.tile_width_units
            )));
        }
        if !self.max_height_units.is_finite() || self.max_height_units <= 0.0 {
            return Err(MasonryError::InvalidOptions(format!(
                "maxHeightUnits must be positive, got {}",
                self.max_height_units
            )));
        }
        if !self.container_width.is_finite() || !self.container_height.is_finite() {
            return Err(MasonryError::InvalidOptions(format!(
                "container size must be finite, got {}x{}",
                self.container_width, self.container_height
            )));
        }
        if let Some(breakpoint) = self.compact_below_width {
            if !breakpoint.is_finite() {
                return Err(MasonryError::InvalidOptions(format!(
                    "compactBelowWidth must be finite, got {}",
                    breakpoint
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate options from their JSON settings form
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Per-flow Options
// =============================================================================

/// Options read by the vertical resolver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalOptions {
    pub tile_width_units: f32,
    pub elastic_width: bool,
    /// Height cap in pixels
    pub max_height: Option<f32>,
    pub container_width: f32,
}

impl VerticalOptions {
    pub fn nominal_width(&self) -> f32 {
        self.tile_width_units * FLAKE_UNIT
    }
}

/// Options read by the horizontal resolver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalOptions {
    pub tile_width_units: f32,
    /// Height cap in pixels
    pub max_height: Option<f32>,
    pub elastic_height: bool,
    pub container_height: f32,
}

impl HorizontalOptions {
    pub fn nominal_width(&self) -> f32 {
        self.tile_width_units * FLAKE_UNIT
    }
}

/// Options read by the compact resolver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactOptions {
    pub container_width: f32,
}

/// Options for exactly one flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "flow", rename_all = "lowercase")]
pub enum FlowOptions {
    Vertical(VerticalOptions),
    Horizontal(HorizontalOptions),
    Compact(CompactOptions),
}

impl FlowOptions {
    pub fn flow(&self) -> FlowMode {
        match self {
            FlowOptions::Vertical(_) => FlowMode::Vertical,
            FlowOptions::Horizontal(_) => FlowMode::Horizontal,
            FlowOptions::Compact(_) => FlowMode::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_validate() {
        let options = LayoutOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.flow, FlowMode::Vertical);
        assert_eq!(options.nominal_width(), 320.0);
        assert_eq!(options.max_height(), None);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let options = LayoutOptions::from_json(
            r#"{"flow":"horizontal","tileWidthUnits":1.5,"containerHeight":656}"#,
        )
        .unwrap();

        assert_eq!(options.flow, FlowMode::Horizontal);
        assert_eq!(options.tile_width_units, 1.5);
        assert_eq!(options.container_height, 656.0);
        assert!(!options.elastic_height);
        assert_eq!(options.max_height_units, 1.0);
    }

    #[test]
    fn test_from_json_rejects_zero_width() {
        let err = LayoutOptions::from_json(r#"{"tileWidthUnits":0}"#).unwrap_err();
        assert!(matches!(err, MasonryError::InvalidOptions(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_flow() {
        let err = LayoutOptions::from_json(r#"{"flow":"diagonal"}"#).unwrap_err();
        assert!(matches!(err, MasonryError::Config(_)));
    }

    #[test]
    fn test_negative_container_is_valid() {
        let options = LayoutOptions::vertical(-50.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip_keeps_camel_case() {
        let options = LayoutOptions::vertical(1000.0).with_max_height_units(2.0);
        let json = options.to_json().unwrap();
        assert!(json.contains("\"enableMaxHeight\":true"));
        assert_eq!(LayoutOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn test_max_height_in_pixels() {
        let options = LayoutOptions::default().with_max_height_units(1.5);
        assert_eq!(options.max_height(), Some(480.0));
    }

    #[test]
    fn test_compact_breakpoint() {
        let options = LayoutOptions::vertical(500.0).with_compact_below_width(600.0);
        assert_eq!(options.effective_flow(), FlowMode::Compact);
        assert!(matches!(options.flow_options(), FlowOptions::Compact(_)));

        let wide = options.with_container(800.0, 0.0);
        assert_eq!(wide.effective_flow(), FlowMode::Vertical);
    }

    #[test]
    fn test_flow_options_carry_only_their_fields() {
        let options = LayoutOptions::horizontal(656.0)
            .with_max_height_units(1.0)
            .with_elastic_height(true)
            .with_elastic_width(true);

        match options.flow_options() {
            FlowOptions::Horizontal(h) => {
                assert_eq!(h.max_height, Some(320.0));
                assert!(h.elastic_height);
                assert_eq!(h.container_height, 656.0);
            }
            other => panic!("expected horizontal options, got {:?}", other.flow()),
        }
    }
}

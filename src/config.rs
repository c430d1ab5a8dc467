//! Tunable layout configuration.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! partial JSON document only needs to name the values it overrides.

use crate::constants::*;
use serde::Deserialize;
use std::time::Duration;

/// A closed rectangle in percent space.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PercentBounds {
    /// Smallest allowed `left_percent`
    pub left_min: f32,
    /// Largest allowed `left_percent`
    pub left_max: f32,
    /// Smallest allowed `top_percent`
    pub top_min: f32,
    /// Largest allowed `top_percent`
    pub top_max: f32,
}

impl PercentBounds {
    /// Clamps a point into the rectangle.
    pub fn clamp(&self, left: f32, top: f32) -> (f32, f32) {
        (
            left.max(self.left_min).min(self.left_max),
            top.max(self.top_min).min(self.top_max),
        )
    }

    /// Whether the point lies inside (edges included).
    pub fn contains(&self, left: f32, top: f32) -> bool {
        (self.left_min..=self.left_max).contains(&left)
            && (self.top_min..=self.top_max).contains(&top)
    }
}

/// Parameters for placement, arrangement and interaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Lower bound of the central band for interior tokens
    pub center_percent_min: f32,
    /// Upper bound of the central band for interior tokens
    pub center_percent_max: f32,
    /// Depth of each edge strip for peripheral tokens
    pub edge_percent: f32,
    /// Full width of the scatter rotation jitter, in degrees
    pub rotation_range: f32,
    /// Scale at the viewport center
    pub scale_center: f32,
    /// Scale in the viewport corners
    pub scale_edge: f32,
    /// Share of each category placed in the central band
    pub interior_ratio: f32,
    /// Minimum interior tokens per category
    pub min_interior_count: usize,
    /// Horizontal highlight stops, indexed by `Category::HIGHLIGHT_ORDER`
    pub highlight_stops: [f32; 4],
    /// Full height of the highlight vertical jitter
    pub highlight_vertical_range: f32,
    /// Full width of the highlight rotation jitter, in degrees
    pub highlight_rotation_range: f32,
    /// Minimum spacing between highlight slots
    pub min_highlight_spacing: f32,
    /// Pass cap for overlap resolution
    pub overlap_max_iterations: usize,
    /// Region highlight slots are clamped into after being pushed
    pub highlight_bounds: PercentBounds,
    /// Radius of the repulsion field around each highlight slot
    pub repulsion_radius: f32,
    /// Multiplier applied to the repulsion deficit
    pub repulsion_strength: f32,
    /// Quiet period for resize debouncing, in milliseconds
    pub resize_debounce_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_percent_min: CENTER_PERCENT_MIN,
            center_percent_max: CENTER_PERCENT_MAX,
            edge_percent: EDGE_PERCENT,
            rotation_range: ROTATION_RANGE,
            scale_center: SCALE_CENTER,
            scale_edge: SCALE_EDGE,
            interior_ratio: INTERIOR_RATIO,
            min_interior_count: MIN_INTERIOR_COUNT,
            highlight_stops: HIGHLIGHT_STOPS,
            highlight_vertical_range: HIGHLIGHT_VERTICAL_RANGE,
            highlight_rotation_range: HIGHLIGHT_ROTATION_RANGE,
            min_highlight_spacing: MIN_HIGHLIGHT_SPACING,
            overlap_max_iterations: OVERLAP_MAX_ITERATIONS,
            highlight_bounds: PercentBounds {
                left_min: HIGHLIGHT_LEFT_BOUNDS.0,
                left_max: HIGHLIGHT_LEFT_BOUNDS.1,
                top_min: HIGHLIGHT_TOP_BOUNDS.0,
                top_max: HIGHLIGHT_TOP_BOUNDS.1,
            },
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl LayoutConfig {
    /// Parses a configuration from JSON and validates it.
    ///
    /// Missing fields keep their defaults.
    ///
    /// # Returns
    ///
    /// The configuration, or a message describing the parse or validation failure.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: LayoutConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid layout config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that ranges are ordered and magnitudes are usable.
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            self.center_percent_min,
            self.center_percent_max,
            self.edge_percent,
            self.rotation_range,
            self.scale_center,
            self.scale_edge,
            self.interior_ratio,
            self.highlight_vertical_range,
            self.highlight_rotation_range,
            self.min_highlight_spacing,
            self.repulsion_radius,
            self.repulsion_strength,
        ];
        if finite.iter().chain(self.highlight_stops.iter()).any(|v| !v.is_finite()) {
            return Err("All numeric values must be finite".to_string());
        }
        if !(0.0..=100.0).contains(&self.center_percent_min)
            || !(0.0..=100.0).contains(&self.center_percent_max)
            || self.center_percent_min > self.center_percent_max
        {
            return Err("Center band must be an ordered range within 0..=100".to_string());
        }
        if !(0.0..=100.0).contains(&self.edge_percent) {
            return Err("Edge depth must lie within 0..=100".to_string());
        }
        if self.scale_edge <= 0.0 {
            return Err("Edge scale must be positive".to_string());
        }
        if self.scale_edge > self.scale_center {
            return Err("Edge scale must not exceed center scale".to_string());
        }
        if !(0.0..=1.0).contains(&self.interior_ratio) {
            return Err("Interior ratio must lie within 0..=1".to_string());
        }
        if self.rotation_range < 0.0
            || self.highlight_rotation_range < 0.0
            || self.highlight_vertical_range < 0.0
        {
            return Err("Jitter ranges must not be negative".to_string());
        }
        if self.highlight_vertical_range > 100.0 {
            return Err("Highlight vertical range must not exceed 100".to_string());
        }
        if self.min_highlight_spacing < 0.0 {
            return Err("Minimum highlight spacing must not be negative".to_string());
        }
        if self.repulsion_radius < 0.0 || self.repulsion_strength < 0.0 {
            return Err("Repulsion radius and strength must not be negative".to_string());
        }
        let b = &self.highlight_bounds;
        if [b.left_min, b.left_max, b.top_min, b.top_max]
            .iter()
            .any(|v| !(0.0..=100.0).contains(v))
        {
            return Err("Highlight bounds must lie within 0..=100".to_string());
        }
        if b.left_min > b.left_max || b.top_min > b.top_max {
            return Err("Highlight bounds must be ordered ranges".to_string());
        }
        if self
            .highlight_stops
            .iter()
            .any(|stop| !(b.left_min..=b.left_max).contains(stop))
        {
            return Err("Highlight stops must lie within the highlight bounds".to_string());
        }
        Ok(())
    }

    /// Resize quiet period as a `Duration`.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

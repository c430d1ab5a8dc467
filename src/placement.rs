//! Stateless placement math.
//!
//! Candidate positions are sampled from an injected random source; scale and
//! the percent → pixel conversion are pure functions of the stored position.
//! `to_viewport_offset` is the only place that relates percent to pixels.

use crate::config::LayoutConfig;
use crate::constants::CENTER_PERCENT;
use crate::types::*;
use rand::Rng;

/// A sampled candidate position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSeed {
    /// Horizontal position
    pub left_percent: f32,
    /// Vertical position
    pub top_percent: f32,
    /// Rotation jitter in degrees
    pub rotation_degrees: f32,
}

impl From<PositionSeed> for PositionRecord {
    fn from(seed: PositionSeed) -> Self {
        PositionRecord::new(seed.left_percent, seed.top_percent, seed.rotation_degrees)
    }
}

/// Edge strip a peripheral token is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Strip along the top side
    Top,
    /// Strip along the right side
    Right,
    /// Strip along the bottom side
    Bottom,
    /// Strip along the left side
    Left,
}

/// Reads a stored coordinate: non-finite values fall back to the center,
/// everything else is clamped into `[0, 100]`.
pub fn sanitize_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        CENTER_PERCENT
    }
}

/// Uniform draw in `[-range/2, range/2)`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, range: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * range
}

/// Uniform draw in `[min, max)`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Samples a position in the central band, biased toward large scale.
pub fn sample_interior_position<R: Rng + ?Sized>(
    config: &LayoutConfig,
    rng: &mut R,
) -> PositionSeed {
    let min = config.center_percent_min;
    let max = config.center_percent_max;
    PositionSeed {
        left_percent: uniform(rng, min, max),
        top_percent: uniform(rng, min, max),
        rotation_degrees: jitter(rng, config.rotation_range),
    }
}

/// Samples a position in one of the four edge strips, each side with equal probability.
pub fn sample_peripheral_position<R: Rng + ?Sized>(
    config: &LayoutConfig,
    rng: &mut R,
) -> PositionSeed {
    let edge = match rng.random::<f32>() {
        e if e < 0.25 => Edge::Top,
        e if e < 0.5 => Edge::Right,
        e if e < 0.75 => Edge::Bottom,
        _ => Edge::Left,
    };
    let mut seed = sample_on_edge(config, edge, rng);
    seed.rotation_degrees = jitter(rng, config.rotation_range);
    seed
}

/// Samples a point inside the strip along `edge`, with zero rotation.
pub fn sample_on_edge<R: Rng + ?Sized>(
    config: &LayoutConfig,
    edge: Edge,
    rng: &mut R,
) -> PositionSeed {
    let depth = config.edge_percent;
    let (left_percent, top_percent) = match edge {
        Edge::Top => (uniform(rng, 0.0, 100.0), uniform(rng, 0.0, depth)),
        Edge::Right => (uniform(rng, 100.0 - depth, 100.0), uniform(rng, 0.0, 100.0)),
        Edge::Bottom => (uniform(rng, 0.0, 100.0), uniform(rng, 100.0 - depth, 100.0)),
        Edge::Left => (uniform(rng, 0.0, depth), uniform(rng, 0.0, 100.0)),
    };
    PositionSeed {
        left_percent,
        top_percent,
        rotation_degrees: 0.0,
    }
}

/// Visual scale as a function of distance from the viewport center.
///
/// Interpolates linearly from `scale_center` at `(50, 50)` to `scale_edge`
/// at the corners. Inputs are sanitized first, so the result always lies
/// within `[scale_edge, scale_center]`.
pub fn scale_from_position(config: &LayoutConfig, left_percent: f32, top_percent: f32) -> f32 {
    let dx = sanitize_percent(left_percent) - CENTER_PERCENT;
    let dy = sanitize_percent(top_percent) - CENTER_PERCENT;
    let distance = (dx * dx + dy * dy).sqrt();
    let max_distance = (CENTER_PERCENT * CENTER_PERCENT + CENTER_PERCENT * CENTER_PERCENT).sqrt();
    let t = (distance / max_distance).clamp(0.0, 1.0);
    config.scale_center * (1.0 - t) + config.scale_edge * t
}

/// Converts percent coordinates into a pixel offset from the viewport center.
pub fn to_viewport_offset(
    left_percent: f32,
    top_percent: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> (f32, f32) {
    let x = viewport_width * sanitize_percent(left_percent) / 100.0 - viewport_width / 2.0;
    let y = viewport_height * sanitize_percent(top_percent) / 100.0 - viewport_height / 2.0;
    (x, y)
}

/// Pixel anchor of a position measured from the viewport's top-left corner.
///
/// The inverse of this relation is what drag updates apply to pointer coordinates.
pub fn to_viewport_anchor(
    left_percent: f32,
    top_percent: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> (f32, f32) {
    let (x, y) = to_viewport_offset(left_percent, top_percent, viewport_width, viewport_height);
    (x + viewport_width / 2.0, y + viewport_height / 2.0)
}

/// Converts a pixel point (from the top-left corner) back to clamped percent.
///
/// A degenerate viewport axis maps to the center.
pub fn from_viewport_point(
    x: f32,
    y: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> (f32, f32) {
    let to_percent = |v: f32, extent: f32| {
        if extent > 0.0 {
            sanitize_percent(v / extent * 100.0)
        } else {
            CENTER_PERCENT
        }
    };
    (to_percent(x, viewport_width), to_percent(y, viewport_height))
}

/// Projects a stored record onto a viewport.
pub fn project(
    config: &LayoutConfig,
    record: &PositionRecord,
    viewport: Viewport,
) -> ScreenTransform {
    let record = record.sanitized();
    let (x, y) = to_viewport_offset(
        record.left_percent,
        record.top_percent,
        viewport.width,
        viewport.height,
    );
    ScreenTransform {
        x,
        y,
        rotation_degrees: record.rotation_degrees,
        scale: scale_from_position(config, record.left_percent, record.top_percent),
    }
}

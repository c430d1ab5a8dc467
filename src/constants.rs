//! Shared layout constants.
//! Centralizes the tweakable values used by placement, arrangement and interaction.
//! `LayoutConfig::default()` is built from these.

// Scatter placement
/// Lower bound (in percent) of the central band used for interior tokens.
pub const CENTER_PERCENT_MIN: f32 = 40.0;
/// Upper bound (in percent) of the central band used for interior tokens.
pub const CENTER_PERCENT_MAX: f32 = 60.0;
/// Depth (in percent) of each edge strip used for peripheral tokens.
pub const EDGE_PERCENT: f32 = 20.0;
/// Full width of the rotation jitter in degrees (±half on each side).
pub const ROTATION_RANGE: f32 = 8.0;

// Distance-based scale
/// Scale of a token sitting exactly at the viewport center.
pub const SCALE_CENTER: f32 = 2.6;
/// Scale of a token sitting in a viewport corner.
pub const SCALE_EDGE: f32 = 0.6;
/// Viewport center on both axes, in percent.
pub const CENTER_PERCENT: f32 = 50.0;

// Interior subset
/// Share of each category that is biased toward the center.
pub const INTERIOR_RATIO: f32 = 0.25;
/// Minimum number of interior tokens per category.
pub const MIN_INTERIOR_COUNT: usize = 2;

// Highlight slots
/// Horizontal stops, indexed by `Category::HIGHLIGHT_ORDER`.
pub const HIGHLIGHT_STOPS: [f32; 4] = [25.0, 40.0, 60.0, 75.0];
/// Full height of the vertical jitter around the center line (±half).
pub const HIGHLIGHT_VERTICAL_RANGE: f32 = 4.0;
/// Full width of the highlight rotation jitter in degrees.
pub const HIGHLIGHT_ROTATION_RANGE: f32 = 8.0;
/// Minimum distance between two highlight slots, in percent units.
pub const MIN_HIGHLIGHT_SPACING: f32 = 3.0;
/// Pass cap for the overlap resolution loop.
pub const OVERLAP_MAX_ITERATIONS: usize = 10;
/// Horizontal region highlight slots are kept in; spans the outer stops.
pub const HIGHLIGHT_LEFT_BOUNDS: (f32, f32) = (25.0, 75.0);
/// Vertical region highlight slots are kept in.
pub const HIGHLIGHT_TOP_BOUNDS: (f32, f32) = (40.0, 60.0);

// Repulsion
/// Radius (percent units) inside which peripheral tokens are pushed away.
pub const REPULSION_RADIUS: f32 = 15.0;
/// Multiplier applied to the radius deficit.
pub const REPULSION_STRENGTH: f32 = 1.5;

// Resize
/// Quiet period before a burst of resize events is re-projected.
pub const RESIZE_DEBOUNCE_MS: u64 = 100;

// Rendering
/// Base font size (in points) multiplied by a token's scale.
pub const BASE_FONT_SIZE: f32 = 14.0;

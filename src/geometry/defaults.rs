//! Default sizes and settings (model units)

/// Smallest width or height a figure's box may have.
pub const MIN_EXTENT: f64 = 0.1;

/// Extra margin added around the stroke extent when computing a figure's
/// drawing area, applied even when the figure has no stroke.
pub const DRAWING_AREA_PADDING: f64 = 1.0;

pub const STROKE_WIDTH: f64 = 1.0;
pub const STROKE_MITER_LIMIT: f64 = 3.0;
pub const STROKE_INNER_WIDTH_FACTOR: f64 = 2.0;

/// Largest angle (radians) covered by a single step of a round join.
pub const ROUND_JOIN_STEP: f64 = std::f64::consts::FRAC_PI_8;

/// Lengths and areas below this are treated as zero.
pub const EPSILON: f64 = 1e-9;

pub const CLIPPER_SCALE: i64 = 1000;

/// Smallest distance two application-space coordinates can differ by and still be told apart.
pub const MIN_DISTANCE: f64 = 1.0 / (CLIPPER_SCALE as f64);

/// Slice paths are widened by a single scaled unit.
pub const SLICE_EXPAND_DELTA: f64 = 1.0;

pub const DEFAULT_MITER_LIMIT: f64 = 2.0;

pub const DEFAULT_ARC_TOLERANCE: f64 = 0.25;

pub const MIN_PATH_POINTS: usize = 3;

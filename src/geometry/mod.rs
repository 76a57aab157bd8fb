pub mod point;
pub mod predicates;
pub mod vertices_holes;

use point::Point;

/// Implicitly closed ring in application space.
pub type Contour = Vec<Point<f64>>;

/// Outer ring (counter-clockwise) followed by its holes (clockwise).
pub type PolygonWithHoles = Vec<Contour>;

/// Closed ring in engine space, `round(v * CLIPPER_SCALE)`.
pub type ScaledPath = Vec<Point<i64>>;

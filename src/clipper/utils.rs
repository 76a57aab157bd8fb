use crate::geometry::point::Point;
use crate::geometry::{Contour, PolygonWithHoles, ScaledPath};
use geo_types::{LineString, MultiLineString, MultiPolygon, Polygon};

/// Scales every ring of `polygon` into engine space.
pub fn contours_to_paths(polygon: &[Contour], scale: i64) -> Vec<ScaledPath> {
    polygon
        .iter()
        .map(|contour| contour.iter().map(|p| p.to_scaled(scale)).collect())
        .collect()
}

/// Flattens polygons-with-holes into one closed path per ring, outer ring first.
pub fn polygons_to_paths(polygons: &[PolygonWithHoles], scale: i64) -> Vec<ScaledPath> {
    polygons
        .iter()
        .flat_map(|circles| contours_to_paths(circles, scale))
        .collect()
}

pub fn path_to_contour(path: &ScaledPath, scale: i64) -> Contour {
    path.iter().map(|p| p.to_unscaled(scale)).collect()
}

/// Drops repeated vertices, including a closing vertex equal to the first.
pub fn clean_path(path: &ScaledPath) -> ScaledPath {
    let mut result: ScaledPath = Vec::with_capacity(path.len());

    for point in path {
        if result.last() != Some(point) {
            result.push(*point);
        }
    }

    while result.len() > 1 && result.first() == result.last() {
        result.pop();
    }

    result
}

pub fn to_line_string(path: &ScaledPath) -> LineString<i64> {
    path.iter().map(|p| (p.x, p.y)).collect()
}

/// Each ring becomes its own polygon; the engine reads them as independent paths.
pub fn to_multi_polygon(paths: &[ScaledPath]) -> MultiPolygon<i64> {
    MultiPolygon(
        paths
            .iter()
            .map(|path| Polygon::new(to_line_string(path), Vec::new()))
            .collect(),
    )
}

pub fn to_multi_line_string(paths: &[ScaledPath]) -> MultiLineString<i64> {
    MultiLineString(paths.iter().map(to_line_string).collect())
}

pub fn from_line_string(line_string: &LineString<i64>) -> ScaledPath {
    let path: ScaledPath = line_string
        .0
        .iter()
        .map(|coord| Point::new(coord.x, coord.y))
        .collect();

    clean_path(&path)
}

/// Splits engine output into `(outer, holes)` groups.
pub fn from_multi_polygon(polygons: &MultiPolygon<i64>) -> Vec<(ScaledPath, Vec<ScaledPath>)> {
    polygons
        .0
        .iter()
        .map(|polygon| {
            (
                from_line_string(polygon.exterior()),
                polygon.interiors().iter().map(from_line_string).collect(),
            )
        })
        .collect()
}

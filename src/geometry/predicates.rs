use crate::clipper::constants::MIN_DISTANCE;
use crate::geometry::point::{Point, PointLocation};
use crate::geometry::vertices_holes::VerticesHoles;
use crate::geometry::Contour;

/// `true` when the points coincide exactly (`precise`) or within one engine unit.
pub fn points_equal(a: &Point<f64>, b: &Point<f64>, precise: bool) -> bool {
    if precise {
        a == b
    } else {
        a.almost_equal(b, Some(MIN_DISTANCE))
    }
}

/// `true` when `point` is strictly inside the outer ring (`circles[0]`) and not
/// strictly inside any hole. Points on the outer boundary count as outside; points
/// on a hole boundary count as inside.
pub fn point_in_polygon(point: &Point<f64>, circles: &[Contour]) -> bool {
    let Some((outer, holes)) = circles.split_first() else {
        return false;
    };

    if point.point_in_polygon(outer) != PointLocation::Inside {
        return false;
    }

    holes
        .iter()
        .all(|hole| point.point_in_polygon(hole) != PointLocation::Inside)
}

/// `true` when no vertex of `inner` lies outside `outer`.
pub fn contour_contains(outer: &Contour, inner: &Contour) -> bool {
    inner
        .iter()
        .all(|point| point.point_in_polygon(outer) != PointLocation::Outside)
}

/// Index-by-index comparison of two encoded polygons: vertices within one engine
/// unit, hole indices identical.
pub fn nearly_equal(a: &VerticesHoles, b: &VerticesHoles) -> bool {
    if a.vertices.len() != b.vertices.len() || a.holes.len() != b.holes.len() {
        return false;
    }

    a.vertices
        .iter()
        .zip(&b.vertices)
        .all(|(pa, pb)| points_equal(pa, pb, false))
        && a.holes == b.holes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Contour {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn square_with_hole() -> Vec<Contour> {
        vec![
            ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            ring(&[(4.0, 4.0), (4.0, 6.0), (6.0, 6.0), (6.0, 4.0)]),
        ]
    }

    #[test]
    fn point_in_hole_is_outside() {
        let circles = square_with_hole();

        assert!(!point_in_polygon(&Point::new(5.0, 5.0), &circles));
        assert!(point_in_polygon(&Point::new(1.0, 1.0), &circles));
        assert!(!point_in_polygon(&Point::new(-1.0, -1.0), &circles));
    }

    #[test]
    fn boundary_handling_differs_for_outer_and_hole() {
        let circles = square_with_hole();

        assert!(!point_in_polygon(&Point::new(0.0, 5.0), &circles));
        assert!(point_in_polygon(&Point::new(4.0, 5.0), &circles));
        assert!(!point_in_polygon(&Point::new(1.0, 1.0), &[]));
    }

    #[test]
    fn containment_accepts_shared_boundary() {
        let outer = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let inside = ring(&[(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)]);
        let touching = ring(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)]);
        let crossing = ring(&[(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)]);

        assert!(contour_contains(&outer, &inside));
        assert!(contour_contains(&outer, &touching));
        assert!(!contour_contains(&outer, &crossing));
    }

    #[test]
    fn nearly_equal_tolerates_one_unit() {
        let base = VerticesHoles::from_contours(&square_with_hole());
        let mut close = base.clone();
        close.vertices[2].x += 0.0005;
        close.vertices[5].y -= 0.0009;

        let mut far = base.clone();
        far.vertices[0].x += 0.002;

        assert!(nearly_equal(&base, &close));
        assert!(!nearly_equal(&base, &far));
    }

    #[test]
    fn nearly_equal_checks_shape_of_encoding() {
        let base = VerticesHoles::from_contours(&square_with_hole());

        let mut shifted_hole = base.clone();
        shifted_hole.holes[0] = 3;
        assert!(!nearly_equal(&base, &shifted_hole));

        let mut fewer = base.clone();
        fewer.vertices.pop();
        assert!(!nearly_equal(&base, &fewer));

        let mut no_holes = base.clone();
        no_holes.holes.clear();
        assert!(!nearly_equal(&base, &no_holes));
    }

    #[test]
    fn precise_equality_is_exact() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(1.0, 1.0005);

        assert!(points_equal(&a, &b, false));
        assert!(!points_equal(&a, &b, true));
        assert!(points_equal(&a, &a, true));
    }
}

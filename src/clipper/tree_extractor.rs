use crate::clipper::poly_tree::{PolyNode, PolyTree};
use crate::clipper::utils::path_to_contour;
use crate::geometry::PolygonWithHoles;
use std::collections::VecDeque;

/// Regroups a solution tree into polygons-with-holes, each an outer ring followed
/// by its direct holes. Islands found inside holes are queued and emitted as
/// further top-level polygons once the current level is done, so the result is
/// always flat whatever the nesting depth.
pub fn extract_polygons(tree: &PolyTree, scale: i64) -> Vec<PolygonWithHoles> {
    let mut result = Vec::new();
    let mut levels: VecDeque<&[PolyNode]> = VecDeque::new();

    levels.push_back(&tree.children);

    while let Some(level) = levels.pop_front() {
        for outer in level {
            let mut circles = Vec::with_capacity(1 + outer.children.len());
            circles.push(path_to_contour(&outer.contour, scale));

            for hole in &outer.children {
                circles.push(path_to_contour(&hole.contour, scale));

                if !hole.children.is_empty() {
                    levels.push_back(&hole.children);
                }
            }

            result.push(circles);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;
    use crate::geometry::ScaledPath;

    fn square(min: i64, max: i64) -> ScaledPath {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]
    }

    fn node(contour: ScaledPath, children: Vec<PolyNode>) -> PolyNode {
        PolyNode { contour, children }
    }

    #[test]
    fn childless_tree_yields_nothing() {
        assert!(extract_polygons(&PolyTree::new(), 1000).is_empty());
    }

    #[test]
    fn outer_ring_is_followed_by_its_holes() {
        let tree = PolyTree {
            children: vec![node(
                square(0, 10_000),
                vec![node(square(1_000, 2_000), vec![]), node(square(5_000, 6_000), vec![])],
            )],
        };
        let polygons = extract_polygons(&tree, 1000);

        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), 3);
        assert_eq!(polygons[0][0][2], Point::new(10.0, 10.0));
        assert_eq!(polygons[0][2][0], Point::new(5.0, 5.0));
    }

    #[test]
    fn deep_nesting_is_flattened_level_by_level() {
        let innermost = node(square(40, 60), vec![]);
        let island = node(square(20, 80), vec![node(square(30, 70), vec![innermost])]);
        let tree = PolyTree {
            children: vec![
                node(square(0, 100), vec![node(square(10, 90), vec![island])]),
                node(square(200, 300), vec![]),
            ],
        };
        let polygons = extract_polygons(&tree, 1);

        assert_eq!(polygons.len(), 4);
        // Top level first, in tree order.
        assert_eq!(polygons[0].len(), 2);
        assert_eq!(polygons[1].len(), 1);
        assert_eq!(polygons[1][0][0], Point::new(200.0, 200.0));
        // Then the island with its own hole, then the island inside that hole.
        assert_eq!(polygons[2].len(), 2);
        assert_eq!(polygons[2][0][0], Point::new(20.0, 20.0));
        assert_eq!(polygons[3], vec![path_to_contour(&square(40, 60), 1)]);
    }
}

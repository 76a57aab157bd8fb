use crate::clipper::clipper::Clipper;
use crate::clipper::clipper_instance::ClipperInstance;
use crate::clipper::enums::{ClipType, PolyType};
use crate::clipper::poly_tree::{PolyNode, PolyTree};
use crate::geometry::point::Point;
use crate::geometry::ScaledPath;

fn rect(x0: i64, y0: i64, x1: i64, y1: i64) -> ScaledPath {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

fn run(subject: &[ScaledPath], clip: &[ScaledPath], clip_type: ClipType) -> PolyTree {
    let mut clipper = Clipper::new();

    clipper.add_paths(subject, PolyType::Subject);
    clipper.add_paths(clip, PolyType::Clip);
    clipper.execute(clip_type)
}

// Outer areas minus hole areas over the whole tree.
fn net_area(tree: &PolyTree) -> f64 {
    let mut total = 0.0;
    let mut stack: Vec<(&PolyNode, bool)> =
        tree.children.iter().map(|node| (node, false)).collect();

    while let Some((node, is_hole)) = stack.pop() {
        let area = Point::polygon_area(&node.contour).abs();

        total += if is_hole { -area } else { area };
        stack.extend(node.children.iter().map(|child| (child, !is_hole)));
    }

    total
}

#[test]
fn union_of_overlapping_squares() {
    let tree = run(
        &[rect(0, 0, 10_000, 10_000)],
        &[rect(5_000, 5_000, 15_000, 15_000)],
        ClipType::Union,
    );

    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].contour.len(), 8);
    assert!(tree.children[0].children.is_empty());
    assert_eq!(net_area(&tree), 175_000_000.0);
}

#[test]
fn intersection_of_overlapping_squares() {
    let tree = run(
        &[rect(0, 0, 10_000, 10_000)],
        &[rect(5_000, 5_000, 15_000, 15_000)],
        ClipType::Intersection,
    );

    assert_eq!(tree.children.len(), 1);
    assert_eq!(net_area(&tree), 25_000_000.0);
}

#[test]
fn difference_with_itself_is_empty() {
    let square = rect(0, 0, 10_000, 10_000);
    let tree = run(&[square.clone()], &[square], ClipType::Difference);

    assert!(tree.is_empty());
}

#[test]
fn xor_keeps_only_the_non_shared_area() {
    let tree = run(
        &[rect(0, 0, 10_000, 10_000)],
        &[rect(5_000, 5_000, 15_000, 15_000)],
        ClipType::Xor,
    );

    assert_eq!(net_area(&tree), 150_000_000.0);
}

#[test]
fn clockwise_ring_in_subject_cuts_a_hole() {
    let mut hole = rect(4_000, 4_000, 6_000, 6_000);
    hole.reverse();

    let tree = run(&[rect(0, 0, 10_000, 10_000), hole], &[], ClipType::Union);

    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].children.len(), 1);
    assert_eq!(net_area(&tree), 96_000_000.0);
}

#[test]
fn disjoint_intersection_is_empty() {
    let tree = run(
        &[rect(0, 0, 1_000, 1_000)],
        &[rect(2_000, 2_000, 3_000, 3_000)],
        ClipType::Intersection,
    );

    assert!(tree.is_empty());
}

#[test]
fn degenerate_paths_are_rejected() {
    let mut clipper = Clipper::new();
    let segment = vec![Point::new(0, 0), Point::new(10, 10), Point::new(0, 0)];

    assert!(!clipper.add_path(&segment, PolyType::Subject));
    assert!(!clipper.add_paths(&[segment, Vec::new()], PolyType::Clip));
    assert_eq!(clipper.path_count(PolyType::Subject), 0);
    assert_eq!(clipper.path_count(PolyType::Clip), 0);
    assert!(clipper.execute(ClipType::Union).is_empty());
}

#[test]
fn clean_forgets_previous_paths() {
    let mut clipper = Clipper::new();

    assert!(clipper.add_path(&rect(0, 0, 10, 10), PolyType::Subject));
    clipper.clean();

    assert_eq!(clipper.path_count(PolyType::Subject), 0);
    assert!(clipper.execute(ClipType::Union).is_empty());
}

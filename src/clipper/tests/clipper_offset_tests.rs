use crate::clipper::clipper_instance::ClipperInstance;
use crate::clipper::clipper_offset::ClipperOffset;
use crate::clipper::enums::{EndType, JoinType};
use crate::clipper_config::ClipperConfig;
use crate::geometry::point::Point;
use crate::geometry::ScaledPath;

fn square(size: i64) -> ScaledPath {
    vec![
        Point::new(0, 0),
        Point::new(size, 0),
        Point::new(size, size),
        Point::new(0, size),
    ]
}

fn abs_area(path: &ScaledPath) -> f64 {
    Point::polygon_area(path).abs()
}

#[test]
fn miter_grow_and_shrink_of_square() {
    let mut offset = ClipperOffset::new();
    offset.add_paths(&[square(10_000)], JoinType::Miter, EndType::ClosedPolygon);

    let grown = offset.execute_tree(1_000.0);
    assert_eq!(grown.children.len(), 1);
    assert_eq!(abs_area(&grown.children[0].contour), 144_000_000.0);

    let shrunk = offset.execute_tree(-1_000.0);
    assert_eq!(shrunk.children.len(), 1);
    assert_eq!(abs_area(&shrunk.children[0].contour), 64_000_000.0);
}

#[test]
fn shrinking_past_the_middle_leaves_nothing() {
    let mut offset = ClipperOffset::new();
    offset.add_paths(&[square(10_000)], JoinType::Miter, EndType::ClosedPolygon);

    assert!(offset.execute_tree(-6_000.0).is_empty());
}

#[test]
fn round_join_rounds_the_corners() {
    let mut offset = ClipperOffset::new();
    offset.configure(&ClipperConfig::new(JoinType::Round, EndType::OpenButt));
    offset.add_paths(&[square(10_000)], JoinType::Round, EndType::ClosedPolygon);

    let tree = offset.execute_tree(1_000.0);
    let area = abs_area(&tree.children[0].contour);
    // 100e6 + 4 * 10e6 + pi * 1e6, approximated by chords
    let exact = 140_000_000.0 + std::f64::consts::PI * 1_000_000.0;

    assert!(tree.children[0].contour.len() > 8);
    assert!((area - exact).abs() < 5_000.0);
}

#[test]
fn open_butt_line_becomes_a_band() {
    let mut offset = ClipperOffset::new();
    let line = vec![Point::new(0, 0), Point::new(10_000, 0)];
    offset.add_paths(&[line], JoinType::Miter, EndType::OpenButt);

    let paths = offset.execute_paths(1_000.0);

    assert_eq!(paths.len(), 1);
    assert_eq!(abs_area(&paths[0]), 20_000_000.0);
}

#[test]
fn closed_line_band_has_outer_and_inner_ring() {
    let mut offset = ClipperOffset::new();
    offset.add_paths(&[square(10_000)], JoinType::Round, EndType::ClosedLine);

    let paths = offset.execute_paths(1.0);
    let mut areas: Vec<f64> = paths.iter().map(abs_area).collect();
    areas.sort_by(|a, b| a.total_cmp(b));

    assert_eq!(paths.len(), 2);
    assert!((areas[0] - 9_998.0 * 9_998.0).abs() < 100.0);
    assert!(areas[1] > 10_000.0 * 10_000.0);
}

#[test]
fn groups_are_merged_into_one_solution() {
    let mut offset = ClipperOffset::new();
    let horizontal = vec![Point::new(0, 5_000), Point::new(10_000, 5_000)];
    let vertical = vec![Point::new(5_000, 0), Point::new(5_000, 10_000)];

    offset.add_paths(&[horizontal], JoinType::Round, EndType::OpenButt);
    offset.add_paths(&[vertical], JoinType::Round, EndType::OpenSquare);

    let tree = offset.execute_tree(100.0);

    assert_eq!(tree.children.len(), 1);
}

#[test]
fn clean_drops_all_groups() {
    let mut offset = ClipperOffset::new();
    offset.add_paths(&[square(10_000)], JoinType::Square, EndType::ClosedPolygon);
    offset.clean();

    assert!(offset.execute_paths(1_000.0).is_empty());
    assert!(offset.execute_tree(1_000.0).is_empty());
}

use crate::geometry::point::{Point, PointLocation};
use crate::geometry::ScaledPath;
use std::cmp::Ordering;

/// A ring of the solution. Children of an outer ring are its holes, children
/// of a hole are the islands inside it, and so on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyNode {
    pub contour: ScaledPath,
    pub children: Vec<PolyNode>,
}

impl PolyNode {
    pub fn new(contour: ScaledPath) -> Self {
        Self {
            contour,
            children: Vec::new(),
        }
    }

    // Rings of one solution never cross, so the first vertex off this ring's
    // boundary decides. A ring lying entirely on the boundary counts as enclosed.
    fn encloses(&self, contour: &ScaledPath) -> bool {
        contour
            .iter()
            .map(|point| point.point_in_polygon(&self.contour))
            .find(|location| *location != PointLocation::OnEdge)
            .map_or(true, |location| location == PointLocation::Inside)
    }
}

/// Root of the solution; its children are the top-level outer rings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyTree {
    pub children: Vec<PolyNode>,
}

impl PolyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Builds the nested tree from grouped engine output (outer ring plus its holes).
    /// Groups whose outer ring sits inside another group's hole are hung under that
    /// hole, so islands end up two levels below their container.
    pub fn from_polygons(polygons: Vec<(ScaledPath, Vec<ScaledPath>)>) -> Self {
        let mut entries: Vec<(f64, PolyNode)> = polygons
            .into_iter()
            .filter(|(outer, _)| !outer.is_empty())
            .map(|(outer, holes)| {
                let area = Point::polygon_area(&outer).abs();
                let mut node = PolyNode::new(outer);
                node.children = holes.into_iter().map(PolyNode::new).collect();
                (area, node)
            })
            .collect();

        // Containers are strictly larger than anything they contain.
        entries.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        let mut tree = PolyTree::new();

        for (_, node) in entries {
            tree.insert(node);
        }

        tree
    }

    fn insert(&mut self, node: PolyNode) {
        let mut level = &mut self.children;

        loop {
            let found = level.iter().enumerate().find_map(|(i, outer)| {
                if !outer.encloses(&node.contour) {
                    return None;
                }

                outer
                    .children
                    .iter()
                    .position(|hole| hole.encloses(&node.contour))
                    .map(|j| (i, j))
            });

            match found {
                Some((i, j)) => level = &mut level[i].children[j].children,
                None => break,
            }
        }

        level.push(node);
    }
}

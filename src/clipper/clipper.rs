use crate::clipper::clipper_instance::ClipperInstance;
use crate::clipper::constants::MIN_PATH_POINTS;
use crate::clipper::enums::{ClipType, PolyType};
use crate::clipper::poly_tree::PolyTree;
use crate::clipper::utils::{clean_path, from_multi_polygon, to_multi_polygon};
use crate::geometry::ScaledPath;
use geo_clipper::ClipperInt;

/// Boolean engine scratch state. Paths are tagged with their operand role when
/// added; `execute` runs both operands under the nonzero fill rule.
pub struct Clipper {
    subject: Vec<ScaledPath>,
    clip: Vec<ScaledPath>,
}

impl ClipperInstance for Clipper {
    fn new() -> Self {
        Self {
            subject: Vec::new(),
            clip: Vec::new(),
        }
    }

    fn clean(&mut self) {
        self.subject.clear();
        self.clip.clear();
    }
}

impl Clipper {
    /// Returns `false` and skips the path when it has fewer than three distinct vertices.
    pub fn add_path(&mut self, polygon: &ScaledPath, poly_type: PolyType) -> bool {
        let path = clean_path(polygon);

        if path.len() < MIN_PATH_POINTS {
            log::warn!(
                "skipping degenerate {:?} path with {} distinct points",
                poly_type,
                path.len()
            );
            return false;
        }

        match poly_type {
            PolyType::Subject => self.subject.push(path),
            PolyType::Clip => self.clip.push(path),
        }

        true
    }

    /// Adds every path; returns `true` when at least one was accepted.
    pub fn add_paths(&mut self, polygons: &[ScaledPath], poly_type: PolyType) -> bool {
        polygons
            .iter()
            .fold(false, |added, path| self.add_path(path, poly_type) || added)
    }

    pub fn path_count(&self, poly_type: PolyType) -> usize {
        match poly_type {
            PolyType::Subject => self.subject.len(),
            PolyType::Clip => self.clip.len(),
        }
    }

    pub fn execute(&self, clip_type: ClipType) -> PolyTree {
        if self.subject.is_empty() && self.clip.is_empty() {
            return PolyTree::new();
        }

        let subject = to_multi_polygon(&self.subject);
        let clip = to_multi_polygon(&self.clip);
        let solution = match clip_type {
            ClipType::Intersection => subject.intersection(&clip),
            ClipType::Union => subject.union(&clip),
            ClipType::Difference => subject.difference(&clip),
            ClipType::Xor => subject.xor(&clip),
        };

        PolyTree::from_polygons(from_multi_polygon(&solution))
    }
}

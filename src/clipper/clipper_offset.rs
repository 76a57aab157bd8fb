use crate::clipper::clipper_instance::ClipperInstance;
use crate::clipper::enums::{EndType, JoinType};
use crate::clipper::poly_tree::PolyTree;
use crate::clipper::utils::{
    clean_path, from_multi_polygon, to_multi_line_string, to_multi_polygon,
};
use crate::clipper_config::ClipperConfig;
use crate::geometry::ScaledPath;
use geo_clipper::{ClipperInt, ClipperOpenInt};
use geo_types::MultiPolygon;

struct OffsetGroup {
    paths: Vec<ScaledPath>,
    join_type: JoinType,
    end_type: EndType,
}

/// Offset engine scratch state: groups of paths, each with its own join and end style.
pub struct ClipperOffset {
    groups: Vec<OffsetGroup>,
    miter_limit: f64,
    arc_tolerance: f64,
}

impl ClipperInstance for ClipperOffset {
    fn new() -> Self {
        let config = ClipperConfig::default();

        Self {
            groups: Vec::new(),
            miter_limit: config.miter_limit,
            arc_tolerance: config.arc_tolerance,
        }
    }

    fn clean(&mut self) {
        self.groups.clear();
    }
}

impl ClipperOffset {
    /// Applies the miter limit and arc tolerance for the next `execute`.
    pub fn configure(&mut self, config: &ClipperConfig) {
        self.miter_limit = config.miter_limit;
        self.arc_tolerance = config.arc_tolerance;
    }

    pub fn add_paths(&mut self, paths: &[ScaledPath], join_type: JoinType, end_type: EndType) {
        let paths: Vec<ScaledPath> = paths
            .iter()
            .map(|path| {
                if end_type.is_open() {
                    // Open paths keep their endpoints even when they coincide.
                    path.clone()
                } else {
                    clean_path(path)
                }
            })
            .filter(|path| !path.is_empty())
            .collect();

        if paths.is_empty() {
            return;
        }

        self.groups.push(OffsetGroup {
            paths,
            join_type,
            end_type,
        });
    }

    fn join_type(&self, join_type: JoinType) -> geo_clipper::JoinType {
        match join_type {
            JoinType::Square => geo_clipper::JoinType::Square,
            JoinType::Round => geo_clipper::JoinType::Round(self.arc_tolerance),
            JoinType::Miter => geo_clipper::JoinType::Miter(self.miter_limit),
        }
    }

    fn end_type(&self, end_type: EndType) -> geo_clipper::EndType {
        match end_type {
            EndType::ClosedPolygon => geo_clipper::EndType::ClosedPolygon,
            EndType::ClosedLine => geo_clipper::EndType::ClosedLine,
            EndType::OpenButt => geo_clipper::EndType::OpenButt,
            EndType::OpenSquare => geo_clipper::EndType::OpenSquare,
            EndType::OpenRound => geo_clipper::EndType::OpenRound(self.arc_tolerance),
        }
    }

    fn offset_group(&self, group: &OffsetGroup, delta: f64) -> MultiPolygon<i64> {
        let join_type = self.join_type(group.join_type);
        let end_type = self.end_type(group.end_type);

        match group.end_type {
            EndType::ClosedPolygon => {
                to_multi_polygon(&group.paths).offset(delta, join_type, end_type)
            }
            _ => to_multi_line_string(&group.paths).offset(delta, join_type, end_type),
        }
    }

    // Groups are offset one by one and merged, matching a single engine run over all paths.
    fn execute_polygons(&self, delta: f64) -> MultiPolygon<i64> {
        let mut solutions = self
            .groups
            .iter()
            .map(|group| self.offset_group(group, delta));

        let first = match solutions.next() {
            Some(solution) => solution,
            None => return MultiPolygon(Vec::new()),
        };

        solutions.fold(first, |merged, solution| merged.union(&solution))
    }

    /// `delta` is in engine units.
    pub fn execute_tree(&self, delta: f64) -> PolyTree {
        PolyTree::from_polygons(from_multi_polygon(&self.execute_polygons(delta)))
    }

    /// Every output ring as a flat path list, outer rings followed by their holes.
    pub fn execute_paths(&self, delta: f64) -> Vec<ScaledPath> {
        from_multi_polygon(&self.execute_polygons(delta))
            .into_iter()
            .flat_map(|(outer, holes)| std::iter::once(outer).chain(holes))
            .filter(|path| !path.is_empty())
            .collect()
    }
}

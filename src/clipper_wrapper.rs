use crate::clipper::clipper::Clipper;
use crate::clipper::clipper_offset::ClipperOffset;
use crate::clipper::clipper_pool::ClipperPool;
use crate::clipper::constants::{CLIPPER_SCALE, SLICE_EXPAND_DELTA};
use crate::clipper::enums::{ClipType, EndType, JoinType, PolyType};
use crate::clipper::tree_extractor::extract_polygons;
use crate::clipper::utils::contours_to_paths;
use crate::clipper_config::ClipperConfig;
use crate::error::GeometryError;
use crate::geometry::vertices_holes::VerticesHoles;
use crate::geometry::{Contour, PolygonWithHoles, ScaledPath};
use crate::utils::round::ClipperRound;

/// Entry point for boolean, offset and slice operations.
///
/// Each call borrows its own engine instance from a pool for the duration of the
/// call, so one wrapper can be shared between threads.
pub struct ClipperWrapper {
    configuration: ClipperConfig,
    clippers: ClipperPool<Clipper>,
    offsets: ClipperPool<ClipperOffset>,
}

impl Default for ClipperWrapper {
    fn default() -> Self {
        Self::new(ClipperConfig::default())
    }
}

impl ClipperWrapper {
    pub fn new(configuration: ClipperConfig) -> Self {
        Self {
            configuration,
            clippers: ClipperPool::new(),
            offsets: ClipperPool::new(),
        }
    }

    pub fn configuration(&self) -> &ClipperConfig {
        &self.configuration
    }

    /// Runs `clip_type` with the rings of `polygons[0]` as subject and the rings of
    /// every other polygon as clip. Outer rings are expected counter-clockwise and
    /// holes clockwise; this is not checked.
    pub fn bool_polygons(
        &self,
        polygons: &[PolygonWithHoles],
        clip_type: ClipType,
    ) -> Vec<PolygonWithHoles> {
        let mut clipper = self.clippers.get();

        for (i, circles) in polygons.iter().enumerate() {
            let poly_type = if i == 0 {
                PolyType::Subject
            } else {
                PolyType::Clip
            };

            clipper.add_paths(&contours_to_paths(circles, CLIPPER_SCALE), poly_type);
        }

        let tree = clipper.execute(clip_type);
        let result = extract_polygons(&tree, CLIPPER_SCALE);

        log::debug!(
            "{:?}: {} subject / {} clip paths -> {} polygons",
            clip_type,
            clipper.path_count(PolyType::Subject),
            clipper.path_count(PolyType::Clip),
            result.len()
        );

        result
    }

    pub fn bool_vertices_holes(
        &self,
        polygons: &[VerticesHoles],
        clip_type: ClipType,
    ) -> Vec<VerticesHoles> {
        let circles_arr: Vec<PolygonWithHoles> =
            polygons.iter().map(VerticesHoles::to_contours).collect();

        self.bool_polygons(&circles_arr, clip_type)
            .iter()
            .map(|circles| VerticesHoles::from_contours(circles))
            .collect()
    }

    /// Same as `bool_vertices_holes` with the engine's numeric clip type code
    /// (0 intersection, 1 union, 2 difference, 3 xor).
    pub fn polygons_boolean(
        &self,
        polygons: &[VerticesHoles],
        clip_type: u8,
    ) -> Result<Vec<VerticesHoles>, GeometryError> {
        let clip_type = ClipType::try_from(clip_type)?;

        Ok(self.bool_vertices_holes(polygons, clip_type))
    }

    /// Same as `polygons_boolean` with the operation named (`"union"`, `"merge"`,
    /// `"intersection"`, `"sub"`, `"xor"`, ...), case-insensitive.
    pub fn polygons_boolean_by_name(
        &self,
        polygons: &[VerticesHoles],
        clip_type: &str,
    ) -> Result<Vec<VerticesHoles>, GeometryError> {
        let clip_type: ClipType = clip_type.parse()?;

        Ok(self.bool_vertices_holes(polygons, clip_type))
    }

    pub fn polygons_merge(&self, polygons: &[VerticesHoles]) -> Vec<VerticesHoles> {
        self.bool_vertices_holes(polygons, ClipType::Union)
    }

    pub fn polygons_intersect(&self, polygons: &[VerticesHoles]) -> Vec<VerticesHoles> {
        self.bool_vertices_holes(polygons, ClipType::Intersection)
    }

    /// Subtracts every other polygon from the first.
    pub fn polygons_sub(&self, polygons: &[VerticesHoles]) -> Vec<VerticesHoles> {
        self.bool_vertices_holes(polygons, ClipType::Difference)
    }

    pub fn polygons_xor(&self, polygons: &[VerticesHoles]) -> Vec<VerticesHoles> {
        self.bool_vertices_holes(polygons, ClipType::Xor)
    }

    /// `true` when the two polygons overlap in more than a point or an edge.
    pub fn intersects(&self, a: &VerticesHoles, b: &VerticesHoles) -> bool {
        self.bool_polygons(&[a.to_contours(), b.to_contours()], ClipType::Intersection)
            .iter()
            .flatten()
            .any(|contour| contour.len() > 2)
    }

    /// Grows (`offset > 0`) or shrinks (`offset < 0`) `polygon` by `offset`
    /// application units using the wrapper's configuration. With `closed` the
    /// rings are offset as polygons; otherwise as open paths capped with the
    /// configured open end type.
    pub fn offset_polygon(
        &self,
        polygon: &[Contour],
        offset: f64,
        closed: bool,
    ) -> Vec<PolygonWithHoles> {
        self.offset_polygon_with(polygon, offset, closed, &self.configuration)
    }

    pub fn offset_polygon_with(
        &self,
        polygon: &[Contour],
        offset: f64,
        closed: bool,
        config: &ClipperConfig,
    ) -> Vec<PolygonWithHoles> {
        let mut clipper_offset = self.offsets.get();
        let end_type = if closed {
            EndType::ClosedPolygon
        } else {
            config.open_end_type
        };

        clipper_offset.configure(config);
        clipper_offset.add_paths(
            &contours_to_paths(polygon, CLIPPER_SCALE),
            config.join_type,
            end_type,
        );

        let delta = (offset * CLIPPER_SCALE as f64).clipper_rounded();
        let result = extract_polygons(&clipper_offset.execute_tree(delta), CLIPPER_SCALE);

        log::debug!(
            "offset {} ({:?}, {:?}): {} rings -> {} polygons",
            offset,
            config.join_type,
            end_type,
            polygon.len(),
            result.len()
        );

        result
    }

    /// Widens cut paths into thin bands, one engine unit to each side. Group `i` is
    /// treated as closed loops when `closing[i][0]` is set, as open polylines
    /// otherwise. The merged bands stay in engine space, ready to be subtracted
    /// by `slice_polygon`.
    pub fn expand_slice_paths(
        &self,
        slice_paths: &[Vec<Contour>],
        closing: &[Vec<bool>],
    ) -> Vec<ScaledPath> {
        let mut clipper_offset = self.offsets.get();

        clipper_offset.configure(&self.configuration);

        for (index, paths) in slice_paths.iter().enumerate() {
            let closed = closing
                .get(index)
                .and_then(|flags| flags.first())
                .copied()
                .unwrap_or(false);
            let end_type = if closed {
                EndType::ClosedLine
            } else {
                EndType::OpenButt
            };

            // Miter joins misbehave at a one-unit offset.
            clipper_offset.add_paths(
                &contours_to_paths(paths, CLIPPER_SCALE),
                JoinType::Round,
                end_type,
            );
        }

        let result = clipper_offset.execute_paths(SLICE_EXPAND_DELTA);

        log::debug!(
            "expanded {} slice groups into {} band paths",
            slice_paths.len(),
            result.len()
        );

        result
    }

    /// Cuts `polygon` along bands produced by `expand_slice_paths`.
    pub fn slice_polygon(
        &self,
        polygon: &VerticesHoles,
        expanded_slice_paths: &[ScaledPath],
    ) -> Vec<VerticesHoles> {
        let mut clipper = self.clippers.get();

        clipper.add_paths(
            &contours_to_paths(&polygon.to_contours(), CLIPPER_SCALE),
            PolyType::Subject,
        );
        clipper.add_paths(expanded_slice_paths, PolyType::Clip);

        let tree = clipper.execute(ClipType::Difference);
        let result: Vec<VerticesHoles> = extract_polygons(&tree, CLIPPER_SCALE)
            .iter()
            .map(|circles| VerticesHoles::from_contours(circles))
            .collect();

        log::debug!(
            "sliced polygon with {} bands into {} pieces",
            expanded_slice_paths.len(),
            result.len()
        );

        result
    }
}

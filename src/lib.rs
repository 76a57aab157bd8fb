use std::sync::OnceLock;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsError;
use web_sys::js_sys::Float64Array;

pub mod clipper;
pub mod clipper_config;
pub mod clipper_wrapper;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod utils;

pub use crate::clipper::enums::{ClipType, EndType, JoinType, PolyType};
pub use crate::clipper_config::ClipperConfig;
pub use crate::clipper_wrapper::ClipperWrapper;
pub use crate::error::GeometryError;
pub use crate::geometry::point::{Point, PointLocation};
pub use crate::geometry::vertices_holes::VerticesHoles;
pub use crate::geometry::{Contour, PolygonWithHoles, ScaledPath};

use crate::geometry::predicates;
use crate::utils::logger::init_logger;
use crate::utils::mem_seg::{
    pack_vertices_holes, unpack_contour, unpack_point, unpack_single, unpack_vertices_holes,
};
use crate::utils::number::Number;

static WRAPPER: OnceLock<ClipperWrapper> = OnceLock::new();

fn wrapper() -> &'static ClipperWrapper {
    WRAPPER.get_or_init(ClipperWrapper::default)
}

fn to_f64_array(values: &[f64]) -> Float64Array {
    let out = Float64Array::new_with_length(values.len() as u32);

    out.copy_from(values);

    out
}

fn pack_result(polygons: &[VerticesHoles]) -> Float64Array {
    to_f64_array(&pack_vertices_holes(polygons))
}

#[wasm_bindgen]
pub fn init_logger_wasm() {
    init_logger();
}

#[wasm_bindgen]
pub fn polygon_area(points: &[f64]) -> f64 {
    f64::polygon_area(points)
}

#[wasm_bindgen]
pub fn polygons_merge_wasm(mem_seg: &[f64]) -> Result<Float64Array, JsError> {
    let polygons = unpack_vertices_holes(mem_seg)?;

    Ok(pack_result(&wrapper().polygons_merge(&polygons)))
}

#[wasm_bindgen]
pub fn polygons_intersect_wasm(mem_seg: &[f64]) -> Result<Float64Array, JsError> {
    let polygons = unpack_vertices_holes(mem_seg)?;

    Ok(pack_result(&wrapper().polygons_intersect(&polygons)))
}

#[wasm_bindgen]
pub fn polygons_sub_wasm(mem_seg: &[f64]) -> Result<Float64Array, JsError> {
    let polygons = unpack_vertices_holes(mem_seg)?;

    Ok(pack_result(&wrapper().polygons_sub(&polygons)))
}

#[wasm_bindgen]
pub fn polygons_xor_wasm(mem_seg: &[f64]) -> Result<Float64Array, JsError> {
    let polygons = unpack_vertices_holes(mem_seg)?;

    Ok(pack_result(&wrapper().polygons_xor(&polygons)))
}

#[wasm_bindgen]
pub fn polygons_boolean_wasm(mem_seg: &[f64], clip_type: u8) -> Result<Float64Array, JsError> {
    let polygons = unpack_vertices_holes(mem_seg)?;

    Ok(pack_result(&wrapper().polygons_boolean(&polygons, clip_type)?))
}

#[wasm_bindgen]
pub fn polygons_boolean_by_name_wasm(
    mem_seg: &[f64],
    clip_type: &str,
) -> Result<Float64Array, JsError> {
    let polygons = unpack_vertices_holes(mem_seg)?;

    Ok(pack_result(
        &wrapper().polygons_boolean_by_name(&polygons, clip_type)?,
    ))
}

/// Offsets every ring in `mem_seg` as one polygon. `config` is a packed
/// `ClipperConfig`.
#[wasm_bindgen]
pub fn offset_polygon_wasm(
    mem_seg: &[f64],
    offset: f64,
    closed: bool,
    config: u32,
) -> Result<Float64Array, JsError> {
    let config = ClipperConfig::deserialize(config)?;
    let contours: Vec<Contour> = unpack_vertices_holes(mem_seg)?
        .iter()
        .flat_map(VerticesHoles::to_contours)
        .collect();

    let result: Vec<VerticesHoles> = wrapper()
        .offset_polygon_with(&contours, offset, closed, &config)
        .iter()
        .map(|circles| VerticesHoles::from_contours(circles))
        .collect();

    Ok(pack_result(&result))
}

/// `slice_mem_seg` holds one entry per cut group: its rings are the cut paths,
/// and `closing[i] != 0` marks group `i` as closed loops.
#[wasm_bindgen]
pub fn slice_polygon_wasm(
    polygon_mem_seg: &[f64],
    slice_mem_seg: &[f64],
    closing: &[u8],
) -> Result<Float64Array, JsError> {
    let polygon = unpack_single(polygon_mem_seg)?;
    let slice_paths: Vec<Vec<Contour>> = unpack_vertices_holes(slice_mem_seg)?
        .iter()
        .map(VerticesHoles::to_contours)
        .collect();
    let closing: Vec<Vec<bool>> = closing.iter().map(|&flag| vec![flag != 0]).collect();

    let bands = wrapper().expand_slice_paths(&slice_paths, &closing);

    Ok(pack_result(&wrapper().slice_polygon(&polygon, &bands)))
}

#[wasm_bindgen]
pub fn point_in_polygon_wasm(point: &[f64], mem_seg: &[f64]) -> Result<bool, JsError> {
    let point = unpack_point(point)?;
    let polygon = unpack_single(mem_seg)?;

    Ok(predicates::point_in_polygon(&point, &polygon.to_contours()))
}

#[wasm_bindgen]
pub fn contour_contains_wasm(outer: &[f64], inner: &[f64]) -> Result<bool, JsError> {
    Ok(predicates::contour_contains(
        &unpack_contour(outer)?,
        &unpack_contour(inner)?,
    ))
}

#[wasm_bindgen]
pub fn nearly_equal_wasm(a: &[f64], b: &[f64]) -> Result<bool, JsError> {
    Ok(predicates::nearly_equal(
        &unpack_single(a)?,
        &unpack_single(b)?,
    ))
}

#[wasm_bindgen]
pub fn intersects_wasm(a: &[f64], b: &[f64]) -> Result<bool, JsError> {
    Ok(wrapper().intersects(&unpack_single(a)?, &unpack_single(b)?))
}

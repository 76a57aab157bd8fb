use crate::error::GeometryError;
use crate::geometry::point::Point;
use crate::geometry::vertices_holes::VerticesHoles;
use crate::geometry::Contour;

// Layout: [polygon_count, (vertex_count, hole_count, hole_0.., x0, y0, x1, y1, ..)..]

pub fn pack_vertices_holes(polygons: &[VerticesHoles]) -> Vec<f64> {
    let data_len: usize = polygons
        .iter()
        .map(|p| 2 + p.holes.len() + (p.vertices.len() << 1))
        .sum();
    let mut out = Vec::with_capacity(1 + data_len);

    out.push(polygons.len() as f64);

    for polygon in polygons {
        out.push(polygon.vertices.len() as f64);
        out.push(polygon.holes.len() as f64);
        out.extend(polygon.holes.iter().map(|&h| h as f64));

        for p in &polygon.vertices {
            out.push(p.x);
            out.push(p.y);
        }
    }

    debug_assert_eq!(out.len(), 1 + data_len);
    out
}

pub fn unpack_vertices_holes(mem_seg: &[f64]) -> Result<Vec<VerticesHoles>, GeometryError> {
    let mut cursor = Cursor { mem_seg, offset: 0 };
    let polygon_count = cursor.read_count("polygon count")?;
    let mut result = Vec::with_capacity(polygon_count);

    for _ in 0..polygon_count {
        let vertex_count = cursor.read_count("vertex count")?;
        let hole_count = cursor.read_count("hole count")?;
        let mut holes = Vec::with_capacity(hole_count);

        for _ in 0..hole_count {
            holes.push(cursor.read_index("hole index")?);
        }

        let coord_count = vertex_count.checked_mul(2).ok_or_else(|| {
            GeometryError::MalformedBuffer(format!("vertex count overflows: {}", vertex_count))
        })?;
        let coords = cursor.take(coord_count, "vertices")?;
        let vertices = coords
            .chunks_exact(2)
            .map(|chunk| Point::new(chunk[0], chunk[1]))
            .collect();

        result.push(VerticesHoles::new(vertices, holes));
    }

    if cursor.offset != mem_seg.len() {
        return Err(GeometryError::MalformedBuffer(format!(
            "{} trailing values",
            mem_seg.len() - cursor.offset
        )));
    }

    Ok(result)
}

/// Reads a single `[x, y]` pair.
pub fn unpack_point(mem_seg: &[f64]) -> Result<Point<f64>, GeometryError> {
    match mem_seg {
        [x, y] => Ok(Point::new(*x, *y)),
        _ => Err(GeometryError::MalformedBuffer(format!(
            "point needs 2 values, got {}",
            mem_seg.len()
        ))),
    }
}

/// Reads a flat `[x0, y0, x1, y1, ..]` ring.
pub fn unpack_contour(mem_seg: &[f64]) -> Result<Contour, GeometryError> {
    if mem_seg.len() & 1 != 0 {
        return Err(GeometryError::MalformedBuffer(format!(
            "contour has an odd number of values: {}",
            mem_seg.len()
        )));
    }

    Ok(mem_seg
        .chunks_exact(2)
        .map(|chunk| Point::new(chunk[0], chunk[1]))
        .collect())
}

/// Unpacks a buffer that must hold exactly one polygon.
pub fn unpack_single(mem_seg: &[f64]) -> Result<VerticesHoles, GeometryError> {
    let mut polygons = unpack_vertices_holes(mem_seg)?;

    match polygons.len() {
        1 => Ok(polygons.remove(0)),
        count => Err(GeometryError::MalformedBuffer(format!(
            "expected one polygon, got {}",
            count
        ))),
    }
}

struct Cursor<'a> {
    mem_seg: &'a [f64],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn remaining(&self) -> usize {
        self.mem_seg.len() - self.offset
    }

    fn take(&mut self, count: usize, what: &str) -> Result<&'a [f64], GeometryError> {
        if count > self.remaining() {
            return Err(GeometryError::MalformedBuffer(format!(
                "{} runs past the end of the buffer",
                what
            )));
        }

        let end = self.offset + count;
        let slice = &self.mem_seg[self.offset..end];
        self.offset = end;

        Ok(slice)
    }

    fn read_index(&mut self, what: &str) -> Result<usize, GeometryError> {
        let value = self.take(1, what)?[0];

        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > usize::MAX as f64
        {
            return Err(GeometryError::MalformedBuffer(format!(
                "{} is not a count: {}",
                what, value
            )));
        }

        Ok(value as usize)
    }

    // Every counted item takes at least one value, so a count can never exceed
    // what is left of the buffer.
    fn read_count(&mut self, what: &str) -> Result<usize, GeometryError> {
        let count = self.read_index(what)?;

        if count > self.remaining() {
            return Err(GeometryError::MalformedBuffer(format!(
                "{} {} exceeds the {} values left",
                what,
                count,
                self.remaining()
            )));
        }

        Ok(count)
    }
}

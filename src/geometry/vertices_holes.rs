use crate::geometry::point::Point;
use crate::geometry::Contour;

/// Flat polygon encoding: outer ring vertices followed by every hole's vertices,
/// with `holes` holding the index where each hole starts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VerticesHoles {
    pub vertices: Vec<Point<f64>>,
    pub holes: Vec<usize>,
}

impl VerticesHoles {
    pub fn new(vertices: Vec<Point<f64>>, holes: Vec<usize>) -> Self {
        Self { vertices, holes }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn from_contours(contours: &[Contour]) -> Self {
        let total: usize = contours.iter().map(Vec::len).sum();
        let mut vertices = Vec::with_capacity(total);
        let mut holes = Vec::with_capacity(contours.len().saturating_sub(1));

        for (i, contour) in contours.iter().enumerate() {
            if contour.is_empty() {
                continue;
            }

            if i > 0 && !vertices.is_empty() {
                holes.push(vertices.len());
            }

            vertices.extend_from_slice(contour);
        }

        Self { vertices, holes }
    }

    /// Splits the vertex list back into rings. Hole indices past the end or out of
    /// order produce no ring rather than an error.
    pub fn to_contours(&self) -> Vec<Contour> {
        let vertex_count = self.vertices.len();
        let mut result = Vec::with_capacity(self.holes.len() + 1);
        let mut start = 0;

        for &hole in self.holes.iter().chain(std::iter::once(&vertex_count)) {
            let end = hole.min(vertex_count);

            if end > start {
                result.push(self.vertices[start..end].to_vec());
                start = end;
            }
        }

        result
    }
}

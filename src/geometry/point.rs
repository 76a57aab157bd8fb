use crate::utils::math::cycle_index;
use crate::utils::number::Number;

/// Where a point lies relative to a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Outside,
    Inside,
    OnEdge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Number> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Point<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn set(&mut self, x: T, y: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline(always)]
    pub fn scale_up(&mut self, value: T) -> &mut Self {
        self.set(self.x * value, self.y * value)
    }

    #[inline(always)]
    pub fn scale_down(&mut self, value: T) -> &mut Self {
        self.set(self.x / value, self.y / value)
    }

    #[inline(always)]
    pub fn clipper_round(&mut self) -> &mut Self {
        self.set(self.x.clipper_rounded(), self.y.clipper_rounded())
    }

    #[inline(always)]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline(always)]
    pub fn almost_equal_x(&self, other: &Self, tolerance: Option<T>) -> bool {
        self.x.almost_equal(other.x, tolerance)
    }

    #[inline(always)]
    pub fn almost_equal_y(&self, other: &Self, tolerance: Option<T>) -> bool {
        self.y.almost_equal(other.y, tolerance)
    }

    /// Component-wise comparison, inclusive of the tolerance.
    #[inline(always)]
    pub fn almost_equal(&self, other: &Self, tolerance: Option<T>) -> bool {
        self.almost_equal_x(other, tolerance) && self.almost_equal_y(other, tolerance)
    }

    /// Signed ring area, counter-clockwise positive.
    pub fn polygon_area(polygon: &[Self]) -> f64 {
        let point_count = polygon.len();

        if point_count < 3 {
            return 0.0;
        }

        let mut result = 0.0;

        for i in 0..point_count {
            let curr = &polygon[i];
            let next = &polygon[cycle_index(i, point_count, 1)];

            result += curr.cross(next).to_f64().unwrap_or(0.0);
        }

        result * 0.5
    }

    /// Classifies the point against `polygon` using the winding crossing test of
    /// Hormann & Agathos; boundary hits short-circuit to `OnEdge`.
    pub fn point_in_polygon(&self, polygon: &[Self]) -> PointLocation {
        let point_count = polygon.len();

        if point_count < 3 {
            return PointLocation::Outside;
        }

        let px = self.x;
        let py = self.y;
        let mut inside = false;
        let mut poly0 = polygon[0];

        for i in 1..=point_count {
            let poly1 = if i == point_count {
                polygon[0]
            } else {
                polygon[i]
            };

            if poly1.y == py
                && (poly1.x == px || (poly0.y == py && ((poly1.x > px) == (poly0.x < px))))
            {
                return PointLocation::OnEdge;
            }

            if (poly0.y < py) != (poly1.y < py) {
                let crosses = if poly0.x >= px {
                    if poly1.x > px {
                        Some(true)
                    } else {
                        None
                    }
                } else if poly1.x > px {
                    None
                } else {
                    Some(false)
                };

                match crosses {
                    Some(true) => inside = !inside,
                    Some(false) => {}
                    None => {
                        let d = (poly0.x - px) * (poly1.y - py) - (poly1.x - px) * (poly0.y - py);

                        if d == T::zero() {
                            return PointLocation::OnEdge;
                        }

                        if (d > T::zero()) == (poly1.y > poly0.y) {
                            inside = !inside;
                        }
                    }
                }
            }

            poly0 = poly1;
        }

        if inside {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }
}

impl Point<f64> {
    /// Application space to engine space: `round(v * scale)`, half away from zero.
    #[inline(always)]
    pub fn to_scaled(&self, scale: i64) -> Point<i64> {
        let mut scaled = *self;
        scaled.scale_up(scale as f64).clipper_round();

        Point::new(scaled.x as i64, scaled.y as i64)
    }
}

impl Point<i64> {
    /// Engine space back to application space.
    #[inline(always)]
    pub fn to_unscaled(&self, scale: i64) -> Point<f64> {
        let mut point = Point::new(self.x as f64, self.y as f64);
        point.scale_down(scale as f64);

        point
    }
}

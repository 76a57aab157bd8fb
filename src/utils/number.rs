use crate::utils::{almost_equal::AlmostEqual, round::ClipperRound};
use num_traits::{FromPrimitive, Num, Signed, ToPrimitive};
use std::fmt::Debug;

fn wrap(index: usize, offset: usize, len: usize) -> usize {
    (index + offset) % len
}

/// Coordinate type shared by application-space (`f64`) and engine-space (`i64`) points.
pub trait Number:
    Num + Copy + PartialOrd + FromPrimitive + ToPrimitive + AlmostEqual + ClipperRound + Signed + Debug
{
    /// Signed area of a flat `[x0, y0, x1, y1, ...]` ring, counter-clockwise positive.
    fn polygon_area(points: &[Self]) -> f64 {
        let len = points.len();

        if len < 6 || len & 1 != 0 {
            return 0.0;
        }

        let n_points = len >> 1;
        let mut acc = 0.0;

        for i in 0..n_points {
            let base = i << 1;
            let x0 = points[wrap(base, 0, len)].to_f64().unwrap_or(0.0);
            let y0 = points[wrap(base, 1, len)].to_f64().unwrap_or(0.0);
            let x1 = points[wrap(base, 2, len)].to_f64().unwrap_or(0.0);
            let y1 = points[wrap(base, 3, len)].to_f64().unwrap_or(0.0);

            acc += x0 * y1 - x1 * y0;
        }

        0.5 * acc
    }

    fn abs_polygon_area(points: &[Self]) -> f64 {
        Self::polygon_area(points).abs()
    }
}

impl Number for f64 {}

impl Number for i64 {}

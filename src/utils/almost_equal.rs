use crate::constants::TOL_F64;

pub trait AlmostEqual<Rhs = Self> {
    fn almost_equal(self, other: Rhs, tolerance: Option<Rhs>) -> bool;
}

impl AlmostEqual for f64 {
    fn almost_equal(self, other: f64, tolerance: Option<f64>) -> bool {
        let tol = tolerance.unwrap_or(TOL_F64);
        (self - other).abs() <= tol
    }
}

impl AlmostEqual for i64 {
    fn almost_equal(self, other: i64, tolerance: Option<i64>) -> bool {
        (self - other).abs() <= tolerance.unwrap_or(0)
    }
}

pub trait ClipperRound {
    fn clipper_rounded(self) -> Self;
}

// Half away from zero, the same way the engine rounds when scaling paths.
impl ClipperRound for f64 {
    fn clipper_rounded(self) -> Self {
        if self < 0.0 {
            (self - 0.5).ceil()
        } else {
            (self + 0.5).floor()
        }
    }
}

impl ClipperRound for i64 {
    fn clipper_rounded(self) -> Self {
        self
    }
}

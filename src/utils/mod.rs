pub mod almost_equal;
pub mod bit_ops;
pub mod logger;
pub mod math;
pub mod mem_seg;
pub mod number;
pub mod round;

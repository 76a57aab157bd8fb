// Clipper module - engine seam for boolean and offset operations
// Wraps the integer clipping engine behind pooled scratch instances and a nested solution tree

pub mod clipper;
pub mod clipper_instance;
pub mod clipper_offset;
pub mod clipper_pool;
pub mod constants;
pub mod enums;
pub mod poly_tree;
pub mod tree_extractor;
pub mod utils;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use enums::*;

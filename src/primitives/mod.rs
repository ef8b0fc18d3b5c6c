//! Core compute primitives (Matrix, Vec2, 2D transforms).
//!
//! These types provide the foundation for the inference pipeline and the
//! stroke rasterizer.

mod matrix;
mod transform;

pub use matrix::Matrix;
pub use transform::Vec2;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;

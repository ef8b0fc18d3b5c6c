//! 2D affine transforms in homogeneous coordinates.
//!
//! Transform matrices are 3x3 and points are homogeneous columns
//! `[x, y, 1]^T`, so a composed transform applies to a point as
//! `m.matmul(&point)`. Composition chains by right-multiplication:
//! `identity2d().translate2d(t)?.rotate2d(a)?`.

use super::Matrix;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A 2D point or extent in continuous coordinates.
///
/// Parameters that accept "a scalar or a pair" in loosely typed code are
/// expressed here as `impl Into<Vec2>`: a bare `f32` splats to both axes,
/// a `(f32, f32)` tuple maps to `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// Creates a point from its components.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<f32> for Vec2 {
    fn from(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Matrix {
    /// Creates a homogeneous column point `[x, y, 1]^T` (3x1).
    #[must_use]
    pub fn point2d(v: impl Into<Vec2>) -> Self {
        let v = v.into();
        let mut out = Self::zeros(3, 1);
        out.set(0, 0, v.x);
        out.set(1, 0, v.y);
        out.set(2, 0, 1.0);
        out
    }

    /// Creates the 3x3 identity transform.
    #[must_use]
    pub fn identity2d() -> Self {
        Self::eye(3)
    }

    /// Creates a 3x3 translation transform.
    #[must_use]
    pub fn translation2d(v: impl Into<Vec2>) -> Self {
        let v = v.into();
        let mut out = Self::eye(3);
        out.set(0, 2, v.x);
        out.set(1, 2, v.y);
        out
    }

    /// Creates a 3x3 scale transform.
    #[must_use]
    pub fn scaling2d(v: impl Into<Vec2>) -> Self {
        let v = v.into();
        let mut out = Self::zeros(3, 3);
        out.set(0, 0, v.x);
        out.set(1, 1, v.y);
        out.set(2, 2, 1.0);
        out
    }

    /// Creates a 3x3 counter-clockwise rotation transform.
    ///
    /// The top-left block is `[cos t, -sin t; sin t, cos t]` with `angle`
    /// in radians.
    #[must_use]
    pub fn rotation2d(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut out = Self::zeros(3, 3);
        out.set(0, 0, cos);
        out.set(0, 1, -sin);
        out.set(1, 0, sin);
        out.set(1, 1, cos);
        out.set(2, 2, 1.0);
        out
    }

    /// Right-multiplies by a translation, for chained composition.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless the receiver has 3 columns.
    pub fn translate2d(&self, v: impl Into<Vec2>) -> Result<Self> {
        self.matmul(&Self::translation2d(v))
    }

    /// Right-multiplies by a scale, for chained composition.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless the receiver has 3 columns.
    pub fn scale2d(&self, v: impl Into<Vec2>) -> Result<Self> {
        self.matmul(&Self::scaling2d(v))
    }

    /// Right-multiplies by a rotation, for chained composition.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless the receiver has 3 columns.
    pub fn rotate2d(&self, angle: f32) -> Result<Self> {
        self.matmul(&Self::rotation2d(angle))
    }

    /// Extracts `(x, y)` from a homogeneous point matrix.
    ///
    /// Reads the first two elements of the backing store.
    ///
    /// # Panics
    ///
    /// Panics if the matrix holds fewer than two elements.
    #[must_use]
    pub fn to_vec2(&self) -> Vec2 {
        Vec2 {
            x: self.as_slice()[0],
            y: self.as_slice()[1],
        }
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;

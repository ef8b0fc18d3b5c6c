//! Pixel-intensity buffer with a soft radial brush.

use crate::primitives::{Matrix, Vec2};

/// A row-major buffer of ink intensities in `[0, 1]`.
///
/// Painting only ever increases cells (saturating add); the sole way back
/// to zero is [`clear`](Self::clear). Coordinates are continuous pixel
/// space, so pointer positions need no rounding before painting.
///
/// # Examples
///
/// ```
/// use reconocer::raster::PixelBuffer;
/// use reconocer::primitives::Vec2;
///
/// let mut buf = PixelBuffer::new(28, 28);
/// buf.paint_segment(Vec2::new(8.0, 6.0), Vec2::new(8.0, 20.0), 6);
/// assert!(buf.as_slice().iter().any(|&v| v > 0.0));
///
/// let image = buf.to_matrix();
/// assert_eq!(image.shape(), (1, 784));
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<f32>,
}

impl PixelBuffer {
    /// Creates an all-zero buffer of the given resolution.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0.0; width * height],
        }
    }

    /// Returns the buffer width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the intensity at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.pixels[y * self.width + x]
    }

    /// Returns the intensities as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.pixels
    }

    /// Resets every cell to exactly 0.
    pub fn clear(&mut self) {
        self.pixels.fill(0.0);
    }

    /// Maps a coordinate on a drawing surface of `canvas_size` into this
    /// buffer's pixel space.
    #[must_use]
    pub fn map_canvas_coord(&self, canvas: Vec2, canvas_size: Vec2) -> Vec2 {
        Vec2 {
            x: canvas.x / canvas_size.x * self.width as f32,
            y: canvas.y / canvas_size.y * self.height as f32,
        }
    }

    /// Paints a brush stroke from `a` toward `b`.
    ///
    /// The segment is walked in `max(|dx|, |dy|)` (rounded) evenly spaced
    /// steps starting at `a`, stamping the brush kernel at each point so
    /// fast drags with sparse samples leave no gaps. A zero-length segment
    /// stamps once, so isolated clicks still paint.
    pub fn paint_segment(&mut self, a: Vec2, b: Vec2, brush_diameter: usize) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;

        let steps = dx.abs().max(dy.abs()).round() as usize;
        if steps == 0 {
            self.stamp(a, brush_diameter);
            return;
        }

        let x_incr = dx / steps as f32;
        let y_incr = dy / steps as f32;
        let mut x = a.x;
        let mut y = a.y;
        for _ in 0..steps {
            self.stamp(Vec2 { x, y }, brush_diameter);
            x += x_incr;
            y += y_incr;
        }
    }

    /// Stamps the radial brush kernel once, centered on `center`.
    ///
    /// For each cell of a square neighborhood of side `brush_diameter`,
    /// the Euclidean distance from the cell center to the kernel center
    /// is normalized by the brush radius and clamped to `[0, 1]`; the
    /// deposited intensity is `(1 - d)^(1/3)`, a fast-falloff brush with
    /// a wide near-opaque core. Cells outside the buffer are skipped.
    /// Accumulation saturates at 1.0.
    pub fn stamp(&mut self, center: Vec2, brush_diameter: usize) {
        let half = brush_diameter as f32 / 2.0;
        for ky in 0..brush_diameter {
            for kx in 0..brush_diameter {
                let px = (kx as f32 - half + center.x).floor();
                let py = (ky as f32 - half + center.y).floor();
                if px < 0.0 || py < 0.0 || px >= self.width as f32 || py >= self.height as f32 {
                    continue;
                }

                // Distance measured at the cell center so a 1-wide brush
                // still deposits ink on its single cell.
                let dx = kx as f32 + 0.5 - half;
                let dy = ky as f32 + 0.5 - half;
                let dist = ((dx * dx + dy * dy).sqrt() / half).min(1.0);
                let alpha = (1.0 - dist).cbrt();

                let idx = py as usize * self.width + px as usize;
                self.pixels[idx] = (self.pixels[idx] + alpha).min(1.0);
            }
        }
    }

    /// Reshapes the buffer into a `1 x (width*height)` row matrix, the
    /// layout the inference pipeline consumes.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_vec(1, self.width * self.height, self.pixels.clone())
            .expect("pixel count equals width * height")
    }
}

#[cfg(test)]
#[path = "canvas_tests.rs"]
mod tests;

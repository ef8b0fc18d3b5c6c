//! Freehand stroke rasterization.
//!
//! Converts pointer-drag segments into soft-edged ink on a low-resolution
//! intensity buffer, the input side of the recognition pipeline.

mod canvas;

pub use canvas::PixelBuffer;

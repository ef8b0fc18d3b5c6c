//! Reconocer: hand-drawn digit recognition in pure Rust.
//!
//! Reconocer turns freehand strokes on a low-resolution canvas into a
//! probability distribution over the ten digit classes, using a
//! hand-rolled dense-matrix kernel and a fixed 784 -> 16 -> 16 -> 10
//! feed-forward network evaluated against pretrained weights.
//!
//! # Quick Start
//!
//! ```
//! use reconocer::prelude::*;
//!
//! // Draw a vertical stroke on a 28x28 canvas.
//! let mut canvas = PixelBuffer::new(28, 28);
//! canvas.paint_segment(Vec2::new(14.0, 5.0), Vec2::new(14.0, 22.0), 6);
//!
//! // Load pretrained weights (here: all zeros) and run inference.
//! let net = DigitNetwork::from_bytes(&vec![0u8; reconocer::nn::PARAM_COUNT * 4])
//!     .expect("buffer has the exact parameter count");
//! let probs = net.predict(&canvas.to_matrix()).expect("network is ready");
//!
//! assert_eq!(probs.shape(), (1, 10));
//! let total: f32 = probs.as_slice().iter().sum();
//! assert!((total - 1.0).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: dense [`Matrix`](primitives::Matrix) kernel and 2D
//!   affine transforms
//! - [`nn`]: the [`DigitNetwork`](nn::DigitNetwork) inference pipeline
//!   and its weight-loading state machine
//! - [`raster`]: the [`PixelBuffer`](raster::PixelBuffer) stroke
//!   rasterizer
//! - [`error`]: error taxonomy and `Result` alias

pub mod error;
pub mod nn;
pub mod prelude;
pub mod primitives;
pub mod raster;

pub use error::{ReconocerError, Result};

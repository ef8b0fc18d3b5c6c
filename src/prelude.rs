//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use reconocer::prelude::*;
//! ```

pub use crate::error::{ReconocerError, Result};
pub use crate::nn::{DigitNetwork, ModelState};
pub use crate::primitives::{Matrix, Vec2};
pub use crate::raster::PixelBuffer;

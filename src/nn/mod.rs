//! Feed-forward digit inference.
//!
//! A fixed 784 -> 16 -> 16 -> 10 network with tanh hidden activations and
//! a softmax output, evaluated with the [`Matrix`](crate::primitives::Matrix)
//! kernel against pretrained weights.

mod network;

pub use network::{DigitNetwork, ModelState, PARAM_COUNT};
